//! Error types for gemichat
//!
//! The API client returns a classified [`ApiFailure`] instead of raising
//! untyped faults across layers; the session loop recovers every variant
//! into a visible answer. Only [`ChatError`] can end the process.

use thiserror::Error;

/// Classified failure of a single API call.
///
/// Every `ask` produces either the answer text or exactly one of these.
/// Nothing crosses the client boundary unclassified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The client was handed a configuration that fails validation
    #[error("configuration is not valid: {0}")]
    ConfigInvalid(String),

    /// Provider returned a non-2xx status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Well-formed response with no extractable candidate text
    #[error("Gemini returned no usable answer")]
    EmptyResponse,

    /// Transport failure: DNS, connection refused, timeout, TLS
    #[error("network error: {0}")]
    Network(String),

    /// Catch-all for anything else during the call
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Per-message validation failures, raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty messages cannot be sent")]
    Empty,

    #[error("message is too long ({length} characters, maximum {max})")]
    TooLong { length: usize, max: usize },
}

/// Startup-level errors. The session loop never starts on an invalid
/// configuration; the error carries the full validation report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("invalid configuration: {}", .0.join("; "))]
    ConfigInvalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_display() {
        let err = ApiFailure::Api {
            status: 400,
            message: "invalid key".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_input_too_long_display() {
        let err = InputError::TooLong {
            length: 2500,
            max: 2000,
        };
        assert!(err.to_string().contains("2500"));
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_config_invalid_lists_every_error() {
        let err = ChatError::ConfigInvalid(vec![
            "GEMINI_API_KEY is not set".to_string(),
            "TEMPERATURE must be between 0.0 and 2.0".to_string(),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("GEMINI_API_KEY"));
        assert!(rendered.contains("TEMPERATURE"));
    }
}
