//! Error types for ytc

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ytc
#[derive(Debug, Error)]
pub enum YtcError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyword or URL pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Provider payload could not be understood
    #[error("Invalid provider dump: {0}")]
    InvalidDump(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// External tool missing from PATH
    #[error("'{0}' was not found. Make sure it is installed and available on PATH")]
    ToolNotInstalled(String),

    /// External command error
    #[error("Command '{command}' failed: {message}")]
    Command { command: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<YtcError>,
    },
}

impl YtcError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        YtcError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for YtcError {
    fn from(err: toml::de::Error) -> Self {
        YtcError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for YtcError {
    fn from(err: toml::ser::Error) -> Self {
        YtcError::Toml(err.to_string())
    }
}

/// Result type alias for ytc
pub type Result<T> = std::result::Result<T, YtcError>;
