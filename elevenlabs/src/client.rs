//! ElevenLabs API client.

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    http::HttpClient,
    tts::TtsService,
    voices::VoicesService,
};

/// Default ElevenLabs API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Default synthesis model.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// ElevenLabs API client.
///
/// # Example
///
/// ```rust,no_run
/// use podforge_elevenlabs::Client;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// # let request = podforge_elevenlabs::SpeechRequest::default();
/// let client = Client::builder("your-api-key").build()?;
/// let audio = client.tts().synthesize("voice-id", &request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
    model_id: String,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Returns the configured synthesis model.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the speech synthesis service.
    pub fn tts(&self) -> TtsService {
        TtsService::new(self.http.clone(), self.model_id.clone())
    }

    /// Returns the voices service (cloning and catalogue).
    pub fn voices(&self) -> VoicesService {
        VoicesService::new(self.http.clone())
    }
}

/// Builder for creating an ElevenLabs client.
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the synthesis model (default: `eleven_multilingual_v2`).
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }

        let http = HttpClient::new(self.base_url, self.api_key)?;

        Ok(Client {
            http: Arc::new(http),
            model_id: self.model_id,
        })
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let err = Client::builder("").build().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_builder_default_model() {
        let client = Client::builder("k").build().unwrap();
        assert_eq!(client.model_id(), DEFAULT_MODEL_ID);
    }
}
