//! Error types for the generative helpers.

use thiserror::Error;

/// Result type alias for generative operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for generative API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by the service.
    #[error("genai: {message} (http_status={http_status})")]
    Api { message: String, http_status: u16 },

    /// API quota exhausted.
    #[error("api quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The model returned no usable content.
    #[error("no content was generated")]
    EmptyOutput,

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid request input.
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl Error {
    /// Creates a new API error, promoting quota failures to their own
    /// variant so callers can report them distinctly.
    pub fn api(message: impl Into<String>, http_status: u16) -> Self {
        let message = message.into();
        if message.contains("QUOTA_EXCEEDED") || http_status == 429 {
            return Error::QuotaExceeded(message);
        }
        Error::Api {
            message,
            http_status,
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_quota_promotion() {
        assert!(matches!(
            Error::api("QUOTA_EXCEEDED: daily limit", 400),
            Error::QuotaExceeded(_)
        ));
        assert!(matches!(
            Error::api("rate limited", 429),
            Error::QuotaExceeded(_)
        ));
        assert!(matches!(Error::api("bad input", 400), Error::Api { .. }));
    }
}
