//! Environment-driven configuration.
//!
//! Credentials are read once at startup and checked eagerly: a command that
//! needs a provider fails with a configuration error before any network call
//! is made, not mid-pipeline.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use podforge_speech::{Pipeline, ProviderSynthesizer};

/// Default listen address for `podforge serve`.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default on-disk store directory.
pub const DEFAULT_STORE_DIR: &str = "podforge-data";

/// All runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct PodforgeConfig {
    pub google_tts_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub store_dir: PathBuf,
    pub addr: String,
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl PodforgeConfig {
    /// Reads configuration from the process environment. Missing keys are
    /// tolerated here; each command validates the providers it needs.
    pub fn from_env() -> Self {
        Self {
            google_tts_api_key: env_var("GOOGLE_TTS_API_KEY"),
            elevenlabs_api_key: env_var("ELEVENLABS_API_KEY"),
            gemini_api_key: env_var("GEMINI_API_KEY"),
            openai_api_key: env_var("OPENAI_API_KEY"),
            store_dir: env_var("PODFORGE_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR)),
            addr: env_var("PODFORGE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
        }
    }

    pub fn require_gemini(&self) -> Result<&str> {
        match self.gemini_api_key.as_deref() {
            Some(key) => Ok(key),
            None => bail!("GEMINI_API_KEY is not set"),
        }
    }

    pub fn require_openai(&self) -> Result<&str> {
        match self.openai_api_key.as_deref() {
            Some(key) => Ok(key),
            None => bail!("OPENAI_API_KEY is not set"),
        }
    }

    /// Builds the synthesis pipeline from configured providers.
    ///
    /// Cloud TTS credentials are mandatory; the voice-clone client is wired
    /// in only when its key is present, so scripts that never hit the clone
    /// sentinel work without it.
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let google_key = self
            .google_tts_api_key
            .as_deref()
            .context("GOOGLE_TTS_API_KEY is not set")?;
        let google = podforge_googletts::Client::builder()
            .api_key(google_key)
            .build()
            .context("building cloud TTS client")?;

        let eleven = match self.elevenlabs_api_key.as_deref() {
            Some(key) => Some(
                podforge_elevenlabs::Client::builder(key)
                    .build()
                    .context("building voice-clone client")?,
            ),
            None => None,
        };

        Ok(Pipeline::new(Arc::new(ProviderSynthesizer::new(
            google, eleven,
        ))))
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = PodforgeConfig {
            google_tts_api_key: None,
            elevenlabs_api_key: None,
            gemini_api_key: None,
            openai_api_key: None,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            addr: DEFAULT_ADDR.to_string(),
        };
        assert!(config.require_gemini().is_err());
        assert!(config.build_pipeline().is_err());
    }
}
