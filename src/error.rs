//! Error types for theme registration, application and persistence.

use itertools::Itertools;
use std::path::PathBuf;

/// Error returned by [`ThemeRegistry`](crate::registry::ThemeRegistry) operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// One or more property names in the theme do not start with `--`.
    #[error("Invalid keys in theme {key}: {}", .invalid_keys.iter().join(", "))]
    Validation {
        key: String,
        invalid_keys: Vec<String>,
    },
    /// No theme is registered under the requested key.
    #[error("No theme registered for key {key}")]
    NotFound { key: String },
    /// The rendered stylesheet could not be written.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Error raised by a [`StyleSink`](crate::sink::StyleSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write stylesheet {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error raised by a [`ThemeStore`](crate::storage::ThemeStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not determine cache directory")]
    NoCacheDir,
    #[error("Theme state file {} is not accessible: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse theme state file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_all_keys() {
        let err = ThemeError::Validation {
            key: "dark".to_string(),
            invalid_keys: vec!["bg".to_string(), "-fg".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid keys in theme dark: bg, -fg");
    }

    #[test]
    fn test_not_found_display() {
        let err = ThemeError::NotFound {
            key: "missing".to_string(),
        };
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_sink_error_converts() {
        let sink_err = SinkError::Write {
            path: PathBuf::from("/tmp/theme.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: ThemeError = sink_err.into();
        assert!(matches!(err, ThemeError::Sink(_)));
        assert!(err.to_string().contains("/tmp/theme.css"));
    }
}
