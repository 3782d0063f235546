//! Error types for the Cloud TTS client.

use thiserror::Error;

/// Result type alias for Cloud TTS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Cloud TTS API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by the service.
    #[error("googletts: {message} (status={status}, http_status={http_status})")]
    Api {
        status: String,
        message: String,
        http_status: u16,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid request input.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(status: impl Into<String>, message: impl Into<String>, http_status: u16) -> Self {
        Error::Api {
            status: status.into(),
            message: message.into(),
            http_status,
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Api { http_status, .. } => *http_status == 401 || *http_status == 403,
            _ => false,
        }
    }

    /// Returns true if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Api { http_status, .. } => *http_status == 400,
            Error::Invalid(_) => true,
            _ => false,
        }
    }
}
