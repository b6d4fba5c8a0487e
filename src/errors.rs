//! Error types for flowstep
//!
//! A single error enum shared by the directory lister, the remote
//! executor, the file saver and both tools.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for workflow steps
#[derive(Error, Debug)]
pub enum StepError {
    /// Input folder missing or not a directory
    #[error("Folder not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No file name contained the pattern (informational)
    #[error("No results found for pattern '{pattern}' in {candidates:?}")]
    PatternNotMatched {
        pattern: String,
        candidates: Vec<String>,
    },

    /// Network failure or non-success HTTP status
    #[error("Request to {url} failed: {reason}")]
    RequestError { url: String, reason: String },

    /// Response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Filesystem failure (including output folder collisions)
    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// URL with no usable file name
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Bad command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for step operations
pub type Result<T> = std::result::Result<T, StepError>;

impl StepError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StepError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Build a request error for the given URL
    pub fn request(url: impl Into<String>, reason: impl ToString) -> Self {
        StepError::RequestError {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for StepError {
    fn from(err: serde_json::Error) -> Self {
        StepError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StepError::NotFound {
            path: PathBuf::from("/missing/folder"),
        };
        assert!(err.to_string().contains("/missing/folder"));
    }

    #[test]
    fn test_pattern_not_matched_lists_candidates() {
        let err = StepError::PatternNotMatched {
            pattern: "zzz".to_string(),
            candidates: vec!["a.png".to_string(), "b.png".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("zzz"));
        assert!(msg.contains("a.png"));
        assert!(msg.contains("b.png"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StepError::io(
            "/out/img1_result",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists"),
        );
        assert!(err.to_string().contains("img1_result"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: StepError = json_err.into();
        assert!(matches!(err, StepError::ParseError(_)));
    }
}
