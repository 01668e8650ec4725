//! Theme loading functionality

use super::models::Theme;
use super::parser::parse_theme;
use color_eyre::eyre::{eyre, Result, WrapErr};
use itertools::Itertools;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const THEME_EXTENSION: &str = "yml";

/// Load every `*.yml` theme in `theme_dir`, keyed by file stem and sorted by key.
///
/// Files that fail to parse or validate are skipped with a warning so a single
/// broken theme does not hide the others.
pub fn load_themes(theme_dir: &Path) -> Result<Vec<(String, Theme)>> {
    if !theme_dir.exists() {
        warn!("Themes directory {} does not exist", theme_dir.display());
        return Ok(vec![]);
    }

    let mut themes = Vec::new();
    for (key, path) in theme_files(theme_dir)? {
        match load_theme_file(&key, &path) {
            Ok(theme) => {
                debug!("Loaded theme {key} from {}", path.display());
                themes.push((key, theme));
            }
            Err(e) => warn!("Skipping theme '{key}': {e:#}"),
        }
    }

    info!("Loaded {} themes from {}", themes.len(), theme_dir.display());
    Ok(themes)
}

/// Load and validate a single theme file
pub fn load_theme_file(key: &str, path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read theme file {}", path.display()))?;
    parse_theme(key, &content).map_err(|e| eyre!("{}: {e}", path.display()))
}

fn theme_files(theme_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(theme_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(THEME_EXTENSION) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((stem.to_string(), path.clone()));
            }
        }
    }
    Ok(files.into_iter().sorted_by(|a, b| a.0.cmp(&b.0)).collect())
}
