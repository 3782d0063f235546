//! ElevenLabs REST client.
//!
//! Covers the two endpoints the podcast pipeline needs: synthesis with a
//! (possibly cloned) voice, and instant voice cloning from an audio sample.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use podforge_elevenlabs::{Client, SpeechRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder("your-api-key").build()?;
//!
//!     let audio = client.tts().synthesize("voice-id", &SpeechRequest {
//!         text: "Hello from my cloned voice".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Audio length: {} bytes", audio.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod tts;
mod voices;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL_ID};
pub use error::{Error, Result};
pub use tts::{SpeechRequest, TtsService, VoiceSettings};
pub use voices::{ClonedVoice, VoiceCloneRequest, VoiceInfo, VoicesService};
