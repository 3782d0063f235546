//! Voice cloning and the account voice catalogue.

use std::sync::Arc;

use reqwest::multipart;
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    http::HttpClient,
};

/// Service for voice cloning and listing account voices.
pub struct VoicesService {
    http: Arc<HttpClient>,
}

impl VoicesService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates an instant voice clone from an audio sample.
    ///
    /// Audio requirements follow the service: at least ~30 seconds of clean
    /// speech, common formats (mp3, wav, m4a).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use podforge_elevenlabs::{Client, VoiceCloneRequest};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder("api-key").build()?;
    /// let sample = std::fs::read("sample.mp3")?;
    /// let voice = client.voices().clone_voice(&VoiceCloneRequest {
    ///     name: "My Voice".to_string(),
    ///     audio: sample,
    ///     filename: "sample.mp3".to_string(),
    ///     description: None,
    /// }).await?;
    /// println!("cloned voice id: {}", voice.voice_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn clone_voice(&self, req: &VoiceCloneRequest) -> Result<ClonedVoice> {
        if req.name.trim().is_empty() {
            return Err(Error::Invalid("voice name must be non-empty".to_string()));
        }
        if req.audio.is_empty() {
            return Err(Error::Invalid("audio sample must be non-empty".to_string()));
        }

        let mut form = multipart::Form::new().text("name", req.name.clone()).part(
            "files",
            multipart::Part::bytes(req.audio.clone()).file_name(req.filename.clone()),
        );

        if let Some(ref description) = req.description {
            form = form.text("description", description.clone());
        }

        self.http.upload("/voices/add", form).await
    }

    /// Lists the voices available to the account, cloned voices included.
    pub async fn list(&self) -> Result<Vec<VoiceInfo>> {
        let response: VoicesApiResponse = self.http.request("GET", "/voices", None::<&()>).await?;
        Ok(response.voices)
    }

    /// Deletes a cloned voice.
    pub async fn delete(&self, voice_id: &str) -> Result<()> {
        let path = format!("/voices/{}", voice_id);
        let _: serde_json::Value = self.http.request("DELETE", &path, None::<&()>).await?;
        Ok(())
    }
}

// ================== Request Types ==================

/// Voice cloning request.
#[derive(Debug, Clone, Default)]
pub struct VoiceCloneRequest {
    /// Display name for the cloned voice.
    pub name: String,
    /// Audio sample bytes.
    pub audio: Vec<u8>,
    /// Filename reported in the multipart upload (e.g., "sample.mp3").
    pub filename: String,
    /// Optional description.
    pub description: Option<String>,
}

// ================== Response Types ==================

/// Result of a voice cloning call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClonedVoice {
    /// Identifier to use as the synthesis voice handle.
    pub voice_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// One voice from the account catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceInfo {
    pub voice_id: String,
    #[serde(default)]
    pub name: String,
    /// Voice category ("premade", "cloned", ...).
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct VoicesApiResponse {
    #[serde(default)]
    voices: Vec<VoiceInfo>,
}
