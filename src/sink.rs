//! Destinations for rendered stylesheets.

use crate::error::SinkError;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives the full text of the active stylesheet.
///
/// Each call replaces the previous content entirely.
pub trait StyleSink {
    fn replace(&mut self, css: &str) -> Result<(), SinkError>;
}

/// Keeps the stylesheet in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    css: Option<String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last written stylesheet.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Number of times the content was replaced.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSink for MemorySink {
    fn replace(&mut self, css: &str) -> Result<(), SinkError> {
        self.css = Some(css.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Writes the stylesheet to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl StyleSink for FileSink {
    fn replace(&mut self, css: &str) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        log::debug!("Writing stylesheet to: {}", self.path.display());
        fs::write(&self.path, css).map_err(|e| self.write_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_sink_replaces_content() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.css(), None);

        sink.replace("a").unwrap();
        sink.replace("b").unwrap();
        assert_eq!(sink.css(), Some("b"));
        assert_eq!(sink.writes(), 2);
    }

    #[test]
    fn test_file_sink_creates_parents_and_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("theme.css");
        let mut sink = FileSink::new(&path);

        sink.replace(":root {\n  --a: 1;\n}\n").unwrap();
        sink.replace(":root {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ":root {\n}\n");
    }

    #[test]
    fn test_file_sink_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be overwritten as a file.
        let mut sink = FileSink::new(dir.path());
        let err = sink.replace("x").unwrap_err();
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
