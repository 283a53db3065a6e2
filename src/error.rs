//! Error types for the property store.
//!
//! Every failure is returned to the immediate caller. Messages are tagged with the
//! library version and name the operation that failed; the wrapped cause, when
//! present, is appended and also exposed through `std::error::Error::source`.

use crate::version::version;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fieldless discriminant of [`ConfigError`], convenient for matching in callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Decode,
    Encode,
    KeyNotFound,
}

/// Configuration store errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File unreadable, unwritable, or the path itself is invalid
    #[error("[propstore {}] {operation}({}): {source}", version(), .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON on load
    #[error("[propstore {}] {operation}: {source}", version())]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be serialized on save
    #[error("[propstore {}] {operation}: {source}", version())]
    Encode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// Lookup miss on `Configuration::value`
    #[error("[propstore {}] Configuration::value({key:?}): key not found", version())]
    KeyNotFound { key: String },
}

impl ConfigError {
    pub(crate) fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        ConfigError::Decode {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn encode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        ConfigError::Encode {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        ConfigError::KeyNotFound {
            key: key.to_string(),
        }
    }

    /// Kind of failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Decode { .. } => ErrorKind::Decode,
            ConfigError::Encode { .. } => ErrorKind::Encode,
            ConfigError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
        }
    }

    /// Description of the failing operation, including the key or path involved
    pub fn operation(&self) -> String {
        match self {
            ConfigError::Io {
                operation, path, ..
            } => format!("{}({})", operation, path.display()),
            ConfigError::Decode { operation, .. } | ConfigError::Encode { operation, .. } => {
                operation.clone()
            }
            ConfigError::KeyNotFound { key } => format!("Configuration::value({:?})", key),
        }
    }

    /// Path involved in an I/O failure
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
