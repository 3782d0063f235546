//! Speech synthesis service for the Cloud TTS API.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::{
    client::MAX_INPUT_CHARS,
    error::{Error, Result},
    http::HttpClient,
};

/// TTS service for synchronous speech synthesis.
pub struct TtsService {
    http: Arc<HttpClient>,
}

impl TtsService {
    /// Creates a new TTS service.
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Performs synchronous speech synthesis.
    ///
    /// The service returns the whole MP3 payload in one response, base64
    /// encoded; the returned [`SynthesizeResponse`] carries the decoded
    /// bytes.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use podforge_googletts::{Client, SynthesizeRequest};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().api_key("api-key").build()?;
    /// let response = client.tts().synthesize(&SynthesizeRequest {
    ///     text: "Hello there".to_string(),
    ///     voice_name: "en-US-Neural2-D".to_string(),
    ///     ..Default::default()
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn synthesize(&self, req: &SynthesizeRequest) -> Result<SynthesizeResponse> {
        if req.text.trim().is_empty() {
            return Err(Error::Invalid("text must be non-empty".to_string()));
        }
        if req.text.chars().count() > MAX_INPUT_CHARS {
            return Err(Error::Invalid(format!(
                "text exceeds maximum length of {} characters",
                MAX_INPUT_CHARS
            )));
        }

        let payload = build_payload(req);
        let response: SynthesizeApiResponse = self
            .http
            .request("POST", "/v1/text:synthesize", Some(&payload))
            .await?;

        if response.audio_content.is_empty() {
            return Err(Error::Other(
                "no audio content received from Cloud TTS".to_string(),
            ));
        }

        let audio = BASE64.decode(&response.audio_content)?;
        Ok(SynthesizeResponse { audio })
    }
}

/// Builds the JSON payload for a synthesize call.
fn build_payload(req: &SynthesizeRequest) -> SynthesizePayload {
    let language_code = if req.language_code.is_empty() {
        "en-US".to_string()
    } else {
        req.language_code.clone()
    };

    SynthesizePayload {
        input: SynthesisInput {
            text: req.text.clone(),
        },
        voice: VoiceSelection {
            language_code,
            name: req.voice_name.clone(),
        },
        audio_config: AudioConfig {
            audio_encoding: "MP3".to_string(),
            speaking_rate: req.speaking_rate,
            pitch: req.pitch,
            volume_gain_db: req.volume_gain_db,
        },
    }
}

// ================== Request Types ==================

/// Speech synthesis request.
#[derive(Debug, Clone, Default)]
pub struct SynthesizeRequest {
    /// Plain text to synthesize (at most [`MAX_INPUT_CHARS`] characters).
    pub text: String,
    /// Voice name (e.g., "en-US-Neural2-D").
    pub voice_name: String,
    /// BCP-47 language code; defaults to "en-US".
    pub language_code: String,
    /// Speaking rate (0.25-4.0, default 1.0).
    pub speaking_rate: Option<f64>,
    /// Pitch in semitones (-20.0-20.0, default 0.0).
    pub pitch: Option<f64>,
    /// Volume gain in dB (-96.0-16.0, default 0.0).
    pub volume_gain_db: Option<f64>,
}

/// Speech synthesis response.
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    /// MP3 audio data (binary, already base64-decoded).
    pub audio: Vec<u8>,
}

// ================== Internal Request/Response Types ==================

#[derive(Debug, Serialize)]
struct SynthesizePayload {
    input: SynthesisInput,
    voice: VoiceSelection,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Debug, Serialize)]
struct VoiceSelection {
    #[serde(rename = "languageCode")]
    language_code: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    audio_encoding: String,
    #[serde(rename = "speakingRate", skip_serializing_if = "Option::is_none")]
    speaking_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pitch: Option<f64>,
    #[serde(rename = "volumeGainDb", skip_serializing_if = "Option::is_none")]
    volume_gain_db: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SynthesizeApiResponse {
    #[serde(rename = "audioContent", default)]
    audio_content: String,
}
