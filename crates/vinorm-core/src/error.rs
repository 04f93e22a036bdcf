//! Unified error types for the normalization engine.

use std::path::PathBuf;

/// Main error type for normalization operations.
///
/// Linguistic ambiguity is never an error: unrecognized spans pass through
/// the pipeline unchanged. Only resource acquisition (dictionary files,
/// configuration) is reported upward.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// A dictionary file could not be read or parsed.
    #[error("dictionary load failed for {}: {reason}", path.display())]
    DictionaryLoad { path: PathBuf, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create a dictionary load error for the given path.
    pub fn dictionary_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DictionaryLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormError::dictionary_load("/data/acronyms.csv", "missing header");
        assert_eq!(
            err.to_string(),
            "dictionary load failed for /data/acronyms.csv: missing header"
        );

        let err = NormError::config("unknown option");
        assert_eq!(err.to_string(), "configuration error: unknown option");
    }

    #[test]
    fn test_error_constructors() {
        let err = NormError::invalid_input("empty token");
        assert!(matches!(err, NormError::InvalidInput(_)));

        let err = NormError::dictionary_load("a.csv", "io");
        assert!(matches!(err, NormError::DictionaryLoad { .. }));
    }
}
