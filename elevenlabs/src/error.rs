//! Error types for the ElevenLabs client.

use thiserror::Error;

/// Result type alias for ElevenLabs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ElevenLabs API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by the service, carrying the `detail` field of the
    /// error body when present.
    #[error("elevenlabs: {detail} (http_status={http_status})")]
    Api { detail: String, http_status: u16 },

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

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(detail: impl Into<String>, http_status: u16) -> Self {
        Error::Api {
            detail: detail.into(),
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
}
