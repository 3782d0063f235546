//! Per-segment speech synthesis.
//!
//! One network round trip per segment, no batching. The [`SegmentSynthesizer`]
//! trait is the seam the pipeline (and its tests) work against;
//! [`ProviderSynthesizer`] is the production implementation over the two
//! provider SDKs.

use async_trait::async_trait;

use crate::{
    error::{Error, Result},
    voices::{Provider, VoiceRoute},
};

/// Per-run synthesis parameters shared by every segment.
#[derive(Debug, Clone)]
pub struct SynthesisParams {
    /// BCP-47 language code.
    pub language: String,
    /// Speaking rate override (cloud TTS only).
    pub speaking_rate: Option<f64>,
    /// Pitch override in semitones (cloud TTS only).
    pub pitch: Option<f64>,
    /// Volume gain override in dB (cloud TTS only).
    pub volume_gain_db: Option<f64>,
    /// Cloned-voice handle used when a route selects the clone provider.
    pub clone_voice_id: String,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            speaking_rate: None,
            pitch: None,
            volume_gain_db: None,
            clone_voice_id: String::new(),
        }
    }
}

/// Synthesizes one segment of text into encoded MP3 bytes.
#[async_trait]
pub trait SegmentSynthesizer: Send + Sync {
    /// Synthesizes `text` with the resolved route. Any provider failure is
    /// terminal for the whole pipeline run.
    async fn synthesize(
        &self,
        text: &str,
        route: &VoiceRoute,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>>;
}

/// Production synthesizer over the cloud TTS and voice-clone SDK clients.
///
/// The clone client is optional: pipelines that never route through the
/// clone sentinel do not need its credentials, and a sentinel route without
/// a configured client is a configuration error.
pub struct ProviderSynthesizer {
    google: podforge_googletts::Client,
    eleven: Option<podforge_elevenlabs::Client>,
}

impl ProviderSynthesizer {
    /// Creates a synthesizer from pre-built SDK clients.
    pub fn new(
        google: podforge_googletts::Client,
        eleven: Option<podforge_elevenlabs::Client>,
    ) -> Self {
        Self { google, eleven }
    }

    async fn cloud_tts(
        &self,
        text: &str,
        voice_id: &str,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>> {
        let response = self
            .google
            .tts()
            .synthesize(&podforge_googletts::SynthesizeRequest {
                text: text.to_string(),
                voice_name: voice_id.to_string(),
                language_code: params.language.clone(),
                speaking_rate: params.speaking_rate,
                pitch: params.pitch,
                volume_gain_db: params.volume_gain_db,
            })
            .await
            .map_err(|e| Error::provider("googletts", e.to_string()))?;

        Ok(response.audio)
    }

    async fn voice_clone(&self, text: &str, params: &SynthesisParams) -> Result<Vec<u8>> {
        let eleven = self.eleven.as_ref().ok_or_else(|| {
            Error::Config("voice-clone provider credentials not configured".to_string())
        })?;

        if params.clone_voice_id.trim().is_empty() {
            return Err(Error::Validation(
                "cloned voice handle is required for the clone route".to_string(),
            ));
        }

        eleven
            .tts()
            .synthesize(
                &params.clone_voice_id,
                &podforge_elevenlabs::SpeechRequest {
                    text: text.to_string(),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| Error::provider("elevenlabs", e.to_string()))
    }
}

#[async_trait]
impl SegmentSynthesizer for ProviderSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        route: &VoiceRoute,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>> {
        match route.provider {
            Provider::CloudTts => self.cloud_tts(text, &route.voice_id, params).await,
            Provider::VoiceClone => self.voice_clone(text, params).await,
        }
    }
}

#[cfg(test)]
mod synth_tests {
    use super::*;

    #[tokio::test]
    async fn test_clone_route_without_client_is_config_error() {
        let google = podforge_googletts::Client::builder()
            .api_key("k")
            .build()
            .unwrap();
        let synth = ProviderSynthesizer::new(google, None);
        let route = VoiceRoute {
            voice_id: crate::voices::CLONE_VOICE_SENTINEL.to_string(),
            provider: Provider::VoiceClone,
        };

        let err = synth
            .synthesize("hi", &route, &SynthesisParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_clone_route_requires_handle() {
        let google = podforge_googletts::Client::builder()
            .api_key("k")
            .build()
            .unwrap();
        let eleven = podforge_elevenlabs::Client::builder("k").build().unwrap();
        let synth = ProviderSynthesizer::new(google, Some(eleven));
        let route = VoiceRoute {
            voice_id: crate::voices::CLONE_VOICE_SENTINEL.to_string(),
            provider: Provider::VoiceClone,
        };

        let err = synth
            .synthesize("hi", &route, &SynthesisParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
