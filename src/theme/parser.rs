//! Theme file parsing and validation

use super::models::Theme;
use crate::error::ThemeError;
use indexmap::IndexMap;
use serde_yaml::Value;

/// Error type for theme file parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ThemeParseError {
    #[error("Invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Property {0} must have a string, number or boolean value")]
    InvalidValue(String),
    #[error(transparent)]
    Invalid(#[from] ThemeError),
}

/// Checks that every property name in `theme` starts with `--`.
///
/// All offending names are reported together.
pub fn validate_theme(key: &str, theme: &Theme) -> Result<(), ThemeError> {
    let invalid_keys = theme.invalid_names();
    if invalid_keys.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::Validation {
            key: key.to_string(),
            invalid_keys,
        })
    }
}

/// Parse a theme from a flat YAML map and validate it.
///
/// Scalar values are accepted so `--gap: 4` does not need quoting.
pub fn parse_theme(key: &str, input: &str) -> Result<Theme, ThemeParseError> {
    if input.trim().is_empty() {
        return Ok(Theme::new());
    }

    let raw: IndexMap<String, Value> = serde_yaml::from_str(input)?;
    let mut theme = Theme::new();
    for (name, value) in raw {
        let value = scalar_to_string(&value)
            .ok_or_else(|| ThemeParseError::InvalidValue(name.clone()))?;
        theme.set(name, value);
    }

    validate_theme(key, &theme)?;
    Ok(theme)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
