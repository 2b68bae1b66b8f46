//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Extraction error from core
    ExtractionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ExtractionError(msg) => write!(f, "Extraction error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<adjadv_core::ExtractError> for CliError {
    fn from(err: adjadv_core::ExtractError) -> Self {
        match err {
            adjadv_core::ExtractError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ExtractionError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
