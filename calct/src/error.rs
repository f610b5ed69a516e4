//! Error handling module for the calct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use calc_lex::LexError;
use thiserror::Error;

/// Main error type for the calct CLI application.
#[derive(Error, Debug)]
pub enum CalctError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the expression could not be obtained.
    #[error("Input error: {0}")]
    Input(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The expression was rejected by the analyser.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Some lines of a multi-line check were rejected.
    #[error("{failed} of {total} expression(s) rejected")]
    Check { failed: usize, total: usize },
}

/// Result type alias using CalctError.
pub type Result<T> = std::result::Result<T, CalctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CalctError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_input_error_display() {
        let err = CalctError::Input("no expression given".to_string());
        assert_eq!(err.to_string(), "Input error: no expression given");
    }

    #[test]
    fn test_lex_error_is_transparent() {
        let lex = calc_lex::analyse("00").unwrap_err();
        let err: CalctError = lex.into();
        assert_eq!(err.to_string(), lex.to_string());
        assert!(matches!(err, CalctError::Lex(_)));
    }

    #[test]
    fn test_check_error_display() {
        let err = CalctError::Check { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 expression(s) rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CalctError = io_err.into();
        assert!(matches!(err, CalctError::Io(_)));
    }
}
