//! Core error types for ritualroom-core.
//!
//! Errors are grouped by the layer that raises them. Persistence errors are
//! caught and logged by [`crate::Tracker`]; only configuration and validation
//! errors normally reach a caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ritualroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a persistence backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Saved payload could not be decoded
    #[error("Failed to decode saved data: {0}")]
    Decode(#[source] serde_json::Error),

    /// Store could not be encoded for saving
    #[error("Failed to encode data for saving: {0}")]
    Encode(#[source] serde_json::Error),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a `YYYY-MM-DD` calendar date
    #[error("Invalid date key '{0}': expected YYYY-MM-DD")]
    InvalidDateKey(String),

    /// Month outside 1..=12 or year outside the supported calendar
    #[error("Invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// Two template entries share an id
    #[error("Duplicate ritual id in template: {0}")]
    DuplicateRitualId(String),

    /// Template entry with a blank id
    #[error("Ritual id must not be empty")]
    EmptyRitualId,

    /// Template has no entries
    #[error("Ritual template must contain at least one ritual")]
    EmptyTemplate,
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _msg) => {
                if inner.code == rusqlite::ErrorCode::DatabaseLocked
                    || inner.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
