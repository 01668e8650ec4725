use color_eyre::eyre::{eyre, Result, WrapErr};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "theme-registry";
const THEMES_DIR: &str = "themes";
const STYLESHEET_FILE: &str = "theme.css";
const DEFAULT_NAMESPACE: &str = "theme-registry";

/// User configuration, read from `~/.config/theme-registry/config.yml`.
///
/// Every field is optional in the file; missing fields fall back to defaults
/// under the application config directory.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of `*.yml` theme files.
    pub themes_dir: Option<PathBuf>,
    /// File the active stylesheet is written to.
    pub stylesheet_path: Option<PathBuf>,
    /// File holding the persisted theme key. Defaults to the user cache directory.
    pub state_path: Option<PathBuf>,
    /// Slot identifier in the state file.
    pub namespace: Option<String>,
    /// Theme applied by `restore` when nothing usable is persisted.
    pub fallback_theme: Option<String>,
    /// Minimum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl Config {
    /// Load the config from its default location, or defaults if the file does not exist.
    pub fn load() -> Result<Config> {
        Self::load_from(&default_config_path()?)
    }

    /// Load the config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let config_string = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
        if config_string.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&config_string)
            .wrap_err_with(|| format!("Invalid config {}", path.display()))
    }

    pub fn themes_dir(&self) -> Result<PathBuf> {
        match &self.themes_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(app_config_dir()?.join(THEMES_DIR)),
        }
    }

    pub fn stylesheet_path(&self) -> Result<PathBuf> {
        match &self.stylesheet_path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_config_dir()?.join(STYLESHEET_FILE)),
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Configured log level, `warn` when unset.
    pub fn log_level(&self) -> Result<LevelFilter> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .map_err(|_| eyre!("Invalid log level: {level}")),
            None => Ok(LevelFilter::Warn),
        }
    }
}

fn app_config_dir() -> Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join(CONFIG_DIR).join(APP_CONFIG_DIR)),
        None => Err(eyre!("No $HOME directory found for config")),
    }
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_config_dir()?.join(FILE_NAME))
}
