//! Voice catalogue service for the Cloud TTS API.

use std::sync::Arc;

use serde::Deserialize;

use crate::{error::Result, http::HttpClient};

/// Service for listing the voices the API offers.
pub struct VoicesService {
    http: Arc<HttpClient>,
}

impl VoicesService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists available voices, optionally filtered by language code.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = podforge_googletts::Client::builder().api_key("k").build()?;
    /// let voices = client.voices().list(Some("en-US")).await?;
    /// for v in &voices {
    ///     println!("{} ({})", v.name, v.ssml_gender);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, language_code: Option<&str>) -> Result<Vec<Voice>> {
        let path = match language_code {
            Some(code) => format!("/v1/voices?languageCode={}", code),
            None => "/v1/voices".to_string(),
        };

        let response: VoicesApiResponse = self.http.request("GET", &path, None::<&()>).await?;
        Ok(response.voices)
    }
}

/// One entry from the voice catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Voice {
    /// Voice name (e.g., "en-US-Neural2-D").
    #[serde(default)]
    pub name: String,
    /// Language codes the voice supports.
    #[serde(rename = "languageCodes", default)]
    pub language_codes: Vec<String>,
    /// SSML gender ("MALE", "FEMALE", "NEUTRAL").
    #[serde(rename = "ssmlGender", default)]
    pub ssml_gender: String,
    /// Natural sample rate in hertz.
    #[serde(rename = "naturalSampleRateHertz", default)]
    pub natural_sample_rate_hertz: u32,
}

#[derive(Debug, Deserialize)]
struct VoicesApiResponse {
    #[serde(default)]
    voices: Vec<Voice>,
}
