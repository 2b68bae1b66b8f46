//! Layered error types
//!
//! Every failure in the extraction pipeline is fatal; callers propagate
//! these with `?` and nothing is written on error.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A file or directory could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The annotation backend failed to run or answer
    #[error("annotator error: {0}")]
    Annotator(String),

    /// The annotation backend answered with something malformed
    #[error("annotator protocol error: {reason}")]
    Protocol {
        /// What was wrong with the response
        reason: String,
    },

    /// JSON (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ExtractError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a protocol error
    pub fn protocol(reason: impl Into<String>) -> Self {
        ExtractError::Protocol {
            reason: reason.into(),
        }
    }
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ExtractError::io(
            "data/adjectives.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/adjectives.txt"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_protocol_error_display() {
        let err = ExtractError::protocol("head index 7 out of range");
        assert_eq!(
            err.to_string(),
            "annotator protocol error: head index 7 out of range"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: ExtractError = json_err.into();
        assert!(matches!(err, ExtractError::Serialization(_)));
    }
}
