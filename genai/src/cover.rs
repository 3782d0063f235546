//! Podcast cover art rendering with the OpenAI images API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};

/// Default OpenAI API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Cover art configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverArtConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Model name (e.g., "dall-e-3").
    pub model: String,
    /// API base URL override.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for CoverArtConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "dall-e-3".to_string(),
            base_url: None,
        }
    }
}

/// Renders podcast cover art.
#[derive(Debug)]
pub struct CoverArt {
    client: Client,
    config: CoverArtConfig,
}

impl CoverArt {
    /// Creates a new cover art renderer.
    pub fn new(config: CoverArtConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self { client, config })
    }

    /// Generates one 1024x1024 cover image and returns its URL.
    ///
    /// The prompt wraps the podcast title with art direction so the raw
    /// title alone is enough for callers.
    pub async fn generate(&self, title: &str) -> Result<String> {
        if title.trim().is_empty() {
            return Err(Error::Invalid("title must be non-empty".to_string()));
        }

        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);
        let url = format!("{}/v1/images/generations", base);

        let body = json!({
            "model": self.config.model,
            "prompt": cover_prompt(title),
            "n": 1,
            "size": "1024x1024",
            "quality": "standard",
            "response_format": "url",
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&bytes, status.as_u16()));
        }

        let parsed: ImagesResponse = serde_json::from_slice(&bytes)?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.url)
            .filter(|u| !u.is_empty())
            .ok_or(Error::EmptyOutput)
    }
}

/// Builds the art-direction prompt.
fn cover_prompt(title: &str) -> String {
    format!(
        "Create a podcast cover art for \"{}\". Make it modern, professional \
         and visually appealing. Use vibrant colors and clean design.",
        title.trim()
    )
}

/// Parses an error response body (`{"error": {"message", ...}}`).
fn parse_error(body: &[u8], http_status: u16) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        message: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return Error::api(parsed.error.message, http_status);
    }

    Error::api(String::from_utf8_lossy(body).to_string(), http_status)
}

// ================== Response Types ==================

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    url: String,
}
