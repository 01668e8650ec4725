//! Persistence of the active theme key between sessions
//!
//! The active key lives in a single logical slot identified by a namespace.
//! [`FileStore`] keeps all namespaces in one JSON file under the user cache
//! directory, so several applications can share it.

use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const APP_CACHE_DIR: &str = "theme-registry";
const STATE_FILE: &str = "active-theme.json";

/// A single string slot holding the last applied theme key.
pub trait ThemeStore {
    /// Returns the stored key, `None` if nothing was stored yet.
    fn get(&self) -> Result<Option<String>, StoreError>;
    /// Stores `value`, replacing any previous key. Last write wins.
    fn set(&mut self, value: &str) -> Result<(), StoreError>;
}

/// In-memory slot, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Number of `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn set(&mut self, value: &str) -> Result<(), StoreError> {
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Slot stored in a JSON file mapping namespace to theme key.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    namespace: String,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }

    /// Store in the platform cache directory (e.g. `~/.cache/theme-registry/active-theme.json`).
    pub fn in_cache_dir(namespace: impl Into<String>) -> Result<Self, StoreError> {
        Ok(Self::new(default_state_path()?, namespace))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        log::debug!("Loading theme state from: {}", self.path.display());
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                self.io_error(source.into())
            } else {
                StoreError::Parse {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }

    /// Sibling file the new state is written to before being renamed over `path`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ThemeStore for FileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(&self.namespace))
    }

    fn set(&mut self, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(e @ StoreError::Parse { .. }) => {
                log::warn!("{e}. Starting a fresh theme state file.");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(self.namespace.clone(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        // Readers only ever see the old or the new file, never a partial one.
        let temp_path = self.temp_path();
        log::debug!("Saving theme state to: {}", self.path.display());
        let written = File::create(&temp_path)
            .and_then(|file| write_entries(file, &entries))
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(e));
        }
        Ok(())
    }
}

/// Serialize `entries` as pretty JSON and flush, so write errors are not lost on drop.
fn write_entries<W: Write>(writer: W, entries: &BTreeMap<String, String>) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.flush()
}

/// Default location of the theme state file
pub fn default_state_path() -> Result<PathBuf, StoreError> {
    let cache_dir = dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
        .ok_or(StoreError::NoCacheDir)?;
    Ok(cache_dir.join(APP_CACHE_DIR).join(STATE_FILE))
}
