//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort configuration resolution.
///
/// Every variant is fatal: the orchestrator stops at the first one and no
/// snapshot is produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required argument was absent (an empty document path).
    #[error("required argument was not supplied: {name}")]
    NullArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// A mandatory variable was set by neither the document nor the environment.
    #[error("{key} must be set")]
    MissingRequiredConfig {
        /// The variable name.
        key: String,
    },

    /// The document is at or above the byte ceiling.
    #[error("configuration file is {size} bytes, must be smaller than {limit} bytes")]
    ConfigTooLarge {
        /// Size of the rejected document.
        size: usize,
        /// The exclusive byte ceiling.
        limit: usize,
    },

    /// The document produced more tokens than the token ceiling.
    #[error("configuration file has more than {limit} tokens")]
    TooManyTokens {
        /// The token ceiling.
        limit: usize,
    },

    /// The document path could not be opened or read.
    #[error("failed to read configuration file: {path}")]
    FileUnreadable {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a new missing required config error.
    pub fn missing_required(key: impl Into<String>) -> Self {
        Self::MissingRequiredConfig { key: key.into() }
    }

    /// Create a new file unreadable error.
    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_names_key() {
        let err = ConfigError::missing_required("AWS_ACCESS_KEY_ID");
        assert_eq!(err.to_string(), "AWS_ACCESS_KEY_ID must be set");
    }

    #[test]
    fn test_too_large_reports_sizes() {
        let err = ConfigError::ConfigTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert!(err.to_string().contains("2048"));
        assert!(err.to_string().contains("1024"));
    }

    #[test]
    fn test_file_unreadable_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ConfigError::file_unreadable("/tmp/canary.json", io);
        assert!(err.to_string().contains("/tmp/canary.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
