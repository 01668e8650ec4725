//! Theme registry: registration, application and recall of the active theme.
//!
//! A [`ThemeRegistry`] owns the registered themes, the [`StyleSink`] that
//! receives the rendered stylesheet and the [`ThemeStore`] slot that remembers
//! the active theme key across sessions. It is constructed once by the
//! application and passed around by reference.
//!
//! Applying a theme merges the `"default"` theme (if registered) underneath
//! it, renders the result as a `:root` custom-property block, replaces the
//! sink content and persists the key. A key is only persisted after it has
//! been written to the sink.

use indexmap::IndexMap;
use log::{debug, error, warn};

use crate::error::ThemeError;
use crate::render::{merge, render_stylesheet};
use crate::sink::StyleSink;
use crate::storage::ThemeStore;
use crate::theme::{validate_theme, Theme, DEFAULT_THEME_KEY};

/// Named themes plus the currently applied one.
///
/// # Example
///
/// ```rust
/// use theme_registry::{MemorySink, MemoryStore, Theme, ThemeRegistry};
///
/// let mut registry = ThemeRegistry::new(MemorySink::new(), MemoryStore::new());
/// registry
///     .register_default_theme(Theme::new().add("--radius", "4px"))?
///     .register_theme("dark", Theme::new().add("--bg", "#000"))?;
///
/// registry.apply_theme("dark")?;
/// assert_eq!(registry.theme_key(), Some("dark"));
/// assert!(registry.sink().css().unwrap().contains("--radius: 4px;"));
/// # Ok::<(), theme_registry::ThemeError>(())
/// ```
#[derive(Debug)]
pub struct ThemeRegistry<S, K> {
    themes: IndexMap<String, Theme>,
    active_key: Option<String>,
    stylesheet: Option<String>,
    sink: S,
    store: K,
}

impl<S: StyleSink, K: ThemeStore> ThemeRegistry<S, K> {
    /// Creates an empty registry writing to `sink` and persisting to `store`.
    pub fn new(sink: S, store: K) -> Self {
        Self {
            themes: IndexMap::new(),
            active_key: None,
            stylesheet: None,
            sink,
            store,
        }
    }

    /// Registers `theme` under `key`, replacing any existing theme with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Validation`] listing every property name that does
    /// not start with `--`. The previous theme for `key`, if any, is kept.
    pub fn register_theme(
        &mut self,
        key: impl Into<String>,
        theme: Theme,
    ) -> Result<&mut Self, ThemeError> {
        let key = key.into();
        if let Err(e) = validate_theme(&key, &theme) {
            error!("{e}");
            return Err(e);
        }

        if self.themes.contains_key(&key) {
            warn!("Overwriting theme {key}");
        }
        debug!("Registered theme {key} with {} properties", theme.len());
        self.themes.insert(key, theme);
        Ok(self)
    }

    /// Registers the layer merged under every applied theme.
    ///
    /// This does not apply anything; call [`apply_theme`](Self::apply_theme) afterwards.
    pub fn register_default_theme(&mut self, theme: Theme) -> Result<&mut Self, ThemeError> {
        self.register_theme(DEFAULT_THEME_KEY, theme)
    }

    /// Registers a batch of themes, e.g. from [`load_themes`](crate::theme::load_themes).
    ///
    /// Stops at the first invalid theme; themes before it stay registered.
    pub fn register_themes<I>(&mut self, themes: I) -> Result<&mut Self, ThemeError>
    where
        I: IntoIterator<Item = (String, Theme)>,
    {
        for (key, theme) in themes {
            self.register_theme(key, theme)?;
        }
        Ok(self)
    }

    /// Applies the theme registered under `key`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotFound`] if no theme is registered for `key`. Nothing
    ///   is written and the active theme is unchanged.
    /// - [`ThemeError::Sink`] if the stylesheet could not be written. The key is
    ///   neither activated nor persisted.
    ///
    /// A failure to persist the key is only logged: the theme is already live.
    pub fn apply_theme(&mut self, key: &str) -> Result<(), ThemeError> {
        let css = match self.render_theme(key) {
            Some(css) => css,
            None => {
                let e = ThemeError::NotFound {
                    key: key.to_string(),
                };
                error!("{e}");
                return Err(e);
            }
        };

        debug!("Setting theme {key}");
        self.sink.replace(&css)?;
        self.stylesheet = Some(css);
        self.active_key = Some(key.to_string());

        if let Err(e) = self.store.set(key) {
            warn!("Failed to persist theme {key}: {e}");
        }
        Ok(())
    }

    /// Applies the persisted theme, or `fallback` when there is none.
    ///
    /// A missing or unknown stored key is logged as a warning. Without a
    /// fallback nothing is applied and `Ok(None)` is returned. On success the
    /// applied key is returned.
    pub fn apply_theme_from_storage(
        &mut self,
        fallback: Option<&str>,
    ) -> Result<Option<String>, ThemeError> {
        let stored = self.store.get().unwrap_or_else(|e| {
            warn!("Failed to read persisted theme: {e}");
            None
        });

        match stored {
            Some(key) if self.themes.contains_key(&key) => {
                self.apply_theme(&key)?;
                Ok(Some(key))
            }
            stored => {
                match stored {
                    Some(key) => warn!("No theme registered for stored key {key}"),
                    None => warn!("No persisted theme found"),
                }
                match fallback {
                    Some(fallback) => {
                        debug!("Falling back to theme {fallback}");
                        self.apply_theme(fallback)?;
                        Ok(Some(fallback.to_string()))
                    }
                    None => Ok(None),
                }
            }
        }
    }

    /// Returns the active theme key.
    ///
    /// Logs a warning and returns `None` if no theme was applied yet.
    pub fn theme_key(&self) -> Option<&str> {
        if self.active_key.is_none() {
            warn!("Theme key requested before any theme was applied");
        }
        self.active_key.as_deref()
    }

    /// Renders the stylesheet for `key` merged over the default theme, without applying it.
    pub fn render_theme(&self, key: &str) -> Option<String> {
        let theme = self.themes.get(key)?;
        let merged = merge(self.default_theme(), theme);
        Some(render_stylesheet(key, &merged))
    }

    pub fn theme(&self, key: &str) -> Option<&Theme> {
        self.themes.get(key)
    }

    pub fn has_theme(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    pub fn default_theme(&self) -> Option<&Theme> {
        self.themes.get(DEFAULT_THEME_KEY)
    }

    /// Registered keys in registration order.
    pub fn theme_keys(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// The stylesheet written by the last successful apply.
    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
