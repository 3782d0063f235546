//! Google Cloud Text-to-Speech REST client.
//!
//! This crate provides a minimal client for the Cloud TTS `text:synthesize`
//! endpoint and the public voice catalogue.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use podforge_googletts::{Client, SynthesizeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!
//!     let response = client.tts().synthesize(&SynthesizeRequest {
//!         text: "Hello, world!".to_string(),
//!         voice_name: "en-US-Neural2-D".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     // response.audio contains MP3 bytes
//!     println!("Audio length: {} bytes", response.audio.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! Either an API key (sent as the `key` query parameter) or an OAuth bearer
//! token paired with a `X-Goog-Api-Key` header:
//!
//! ```rust,no_run
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = podforge_googletts::Client::builder()
//!     .bearer_token("ya29...")
//!     .api_key("AIza...")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http;
mod tts;
mod voices;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, MAX_INPUT_CHARS};
pub use error::{Error, Result};
pub use tts::{SynthesizeRequest, SynthesizeResponse, TtsService};
pub use voices::{Voice, VoicesService};
