//! Error taxonomy for the synthesis pipeline.
//!
//! Four families, all terminal: nothing is retried and there is no partial
//! success. A failure at segment k discards segments 1..k-1.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable credentials, detected before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unusable request input (empty text, missing voice, no parseable
    /// segments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Non-success response from an external synthesis provider. The
    /// provider-reported message is carried verbatim.
    #[error("{provider}: {message}")]
    Provider { provider: String, message: String },

    /// External transcoding process failed or a stream broke mid-transfer.
    #[error("audio processing error: {0}")]
    Processing(String),
}

impl Error {
    /// Creates a provider error, naming the upstream service.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the request rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_provider_error_names_upstream() {
        let err = Error::provider("googletts", "PERMISSION_DENIED: bad key");
        assert_eq!(err.to_string(), "googletts: PERMISSION_DENIED: bad key");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::Validation("empty".to_string()).is_client_error());
        assert!(!Error::Config("no key".to_string()).is_client_error());
    }
}
