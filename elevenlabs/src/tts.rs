//! Cloned-voice speech synthesis.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    http::HttpClient,
};

/// TTS service for synthesis with a (possibly cloned) voice.
pub struct TtsService {
    http: Arc<HttpClient>,
    model_id: String,
}

impl TtsService {
    /// Creates a new TTS service.
    pub(crate) fn new(http: Arc<HttpClient>, model_id: String) -> Self {
        Self { http, model_id }
    }

    /// Synthesizes speech with the given voice.
    ///
    /// Requests standard MP3 output (`mp3_44100_128`) and drains the binary
    /// response in full before returning.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use podforge_elevenlabs::{Client, SpeechRequest};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder("api-key").build()?;
    /// let audio = client.tts().synthesize("21m00Tcm4TlvDq8ikWAM", &SpeechRequest {
    ///     text: "Hello there".to_string(),
    ///     ..Default::default()
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn synthesize(&self, voice_id: &str, req: &SpeechRequest) -> Result<Vec<u8>> {
        if voice_id.trim().is_empty() {
            return Err(Error::Invalid("voice_id must be non-empty".to_string()));
        }
        if req.text.trim().is_empty() {
            return Err(Error::Invalid("text must be non-empty".to_string()));
        }

        let payload = SpeechPayload {
            text: req.text.clone(),
            model_id: self.model_id.clone(),
            voice_settings: req.voice_settings.clone().unwrap_or_default(),
        };

        let path = format!("/text-to-speech/{}?output_format=mp3_44100_128", voice_id);
        let audio = self.http.request_bytes(&path, &payload).await?;

        if audio.is_empty() {
            return Err(Error::Other(
                "no audio content received from ElevenLabs".to_string(),
            ));
        }

        Ok(audio)
    }
}

// ================== Request Types ==================

/// Speech synthesis request.
#[derive(Debug, Clone, Default)]
pub struct SpeechRequest {
    /// Text to synthesize. The whole segment is sent in one call; the API
    /// has no per-request chunking.
    pub text: String,
    /// Voice settings; defaults are applied when absent.
    pub voice_settings: Option<VoiceSettings>,
}

/// Voice rendering settings.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    /// Stability (0.0-1.0).
    pub stability: f64,
    /// Similarity boost (0.0-1.0).
    pub similarity_boost: f64,
    /// Style exaggeration (0.0-1.0).
    pub style: f64,
    /// Whether to boost speaker similarity.
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.5,
            use_speaker_boost: true,
        }
    }
}

// ================== Internal Request Types ==================

#[derive(Debug, Serialize)]
struct SpeechPayload {
    text: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

#[cfg(test)]
mod tts_tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        let payload = SpeechPayload {
            text: "Hi".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            voice_settings: VoiceSettings::default(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], "Hi");
        assert_eq!(json["model_id"], "eleven_multilingual_v2");
        assert_eq!(json["voice_settings"]["stability"], 0.5);
        assert_eq!(json["voice_settings"]["similarity_boost"], 0.75);
        assert_eq!(json["voice_settings"]["use_speaker_boost"], true);
    }

    #[tokio::test]
    async fn test_rejects_empty_voice_id() {
        let client = crate::Client::builder("k").build().unwrap();
        let err = client
            .tts()
            .synthesize(
                "",
                &SpeechRequest {
                    text: "Hi".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("voice_id"));
    }
}
