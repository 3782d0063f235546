//! Cloud TTS API client.

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    http::{AuthConfig, HttpClient},
    tts::TtsService,
    voices::VoicesService,
};

/// Default Cloud TTS API base URL.
pub const DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// Maximum number of input characters accepted per synthesize call.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Cloud TTS API client.
///
/// # Example
///
/// ```rust,no_run
/// use podforge_googletts::Client;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// # let request = podforge_googletts::SynthesizeRequest::default();
/// let client = Client::builder().api_key("your-api-key").build()?;
/// let response = client.tts().synthesize(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the TTS synthesis service.
    pub fn tts(&self) -> TtsService {
        TtsService::new(self.http.clone())
    }

    /// Returns the voice catalogue service.
    pub fn voices(&self) -> VoicesService {
        VoicesService::new(self.http.clone())
    }
}

/// Builder for creating a Cloud TTS client.
pub struct ClientBuilder {
    api_key: Option<String>,
    bearer_token: Option<String>,
    base_url: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            api_key: None,
            bearer_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the API key, sent as the `key` query parameter.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets an OAuth bearer token. When a token is set, any API key is sent
    /// as the `X-Goog-Api-Key` header instead of a query parameter.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_none() && self.bearer_token.is_none() {
            return Err(Error::Config(
                "at least one authentication method must be provided".to_string(),
            ));
        }

        let http = HttpClient::new(
            self.base_url,
            AuthConfig {
                api_key: self.api_key,
                bearer_token: self.bearer_token,
            },
        )?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}
