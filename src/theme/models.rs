//! Theme data models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key reserved for the default layer merged under every applied theme.
pub const DEFAULT_THEME_KEY: &str = "default";

/// Prefix every custom property name must carry.
pub const PROPERTY_PREFIX: &str = "--";

/// A set of CSS custom properties, kept in insertion order.
///
/// A theme file is a flat YAML map:
///
/// ```yaml
/// --bg: "#282a36"
/// --fg: "#f8f8f2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    properties: IndexMap<String, String>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated theme for chaining.
    ///
    /// Setting a name twice keeps its original position and replaces the value.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Sets a property in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Property names that do not start with [`PROPERTY_PREFIX`], in theme order.
    pub fn invalid_names(&self) -> Vec<String> {
        self.properties
            .keys()
            .filter(|name| !name.starts_with(PROPERTY_PREFIX))
            .cloned()
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Theme
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let theme = Theme::new().add("--b", "2").add("--a", "1");
        let names: Vec<&str> = theme.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["--b", "--a"]);
    }

    #[test]
    fn test_add_existing_name_replaces_in_place() {
        let theme = Theme::new()
            .add("--a", "1")
            .add("--b", "2")
            .add("--a", "3");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.get("--a"), Some("3"));
        assert_eq!(theme.iter().next(), Some(("--a", "3")));
    }

    #[test]
    fn test_invalid_names() {
        let theme = Theme::new()
            .add("--ok", "1")
            .add("color", "red")
            .add("-x", "2");
        assert_eq!(theme.invalid_names(), vec!["color", "-x"]);
    }

    #[test]
    fn test_from_iter() {
        let theme: Theme = [("--a", "1"), ("--b", "2")].into_iter().collect();
        assert!(theme.contains("--b"));
        assert!(!theme.is_empty());
    }
}
