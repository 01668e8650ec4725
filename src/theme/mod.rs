//! Theme system
//!
//! A theme is a flat map of CSS custom properties. Themes are usually kept as
//! YAML files in a themes directory, one file per theme, the file stem being
//! the theme key.

pub mod loader;
pub mod models;
pub mod parser;

#[cfg(test)]
mod tests;

pub use loader::load_themes;
pub use models::{Theme, DEFAULT_THEME_KEY, PROPERTY_PREFIX};
pub use parser::{parse_theme, validate_theme};
