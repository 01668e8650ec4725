//! Named sets of CSS custom properties with a persisted active selection.
//!
//! Themes are registered in a [`ThemeRegistry`], merged over an optional
//! `"default"` layer when applied, rendered as a `:root` block and written to
//! a [`StyleSink`]. The applied key is remembered in a [`ThemeStore`] so it
//! can be restored with [`ThemeRegistry::apply_theme_from_storage`].

pub mod config;
pub mod error;
pub mod logger;
pub mod registry;
pub mod render;
pub mod sink;
pub mod storage;
pub mod theme;

pub use error::{SinkError, StoreError, ThemeError};
pub use registry::ThemeRegistry;
pub use sink::{FileSink, MemorySink, StyleSink};
pub use storage::{FileStore, MemoryStore, ThemeStore};
pub use theme::{Theme, DEFAULT_THEME_KEY};
