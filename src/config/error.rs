//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File path was not set
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration file
    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create configuration directory
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// A page name that does not exist
    #[error("Invalid page '{value}' for {field}")]
    InvalidPage { field: &'static str, value: String },

    /// A log level that `log` does not recognize
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A theme name without a palette
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Overrides for shortcut ids that do not exist
    #[error("Unknown shortcut ids: {}", .0.join(", "))]
    UnknownShortcuts(Vec<String>),
}
