//! Generative helpers for podcast authoring.
//!
//! Two small REST clients:
//!
//! - [`ScriptWriter`]: drafts a speaker-annotated podcast script with the
//!   Gemini `generateContent` API.
//! - [`CoverArt`]: renders podcast cover art with the OpenAI images API.
//!
//! # Example
//!
//! ```rust,no_run
//! use podforge_genai::{ScriptWriter, ScriptWriterConfig, ScriptRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let writer = ScriptWriter::new(ScriptWriterConfig {
//!         api_key: "AIza...".to_string(),
//!         ..Default::default()
//!     })?;
//!
//!     let script = writer.generate(&ScriptRequest {
//!         title: "The history of radio".to_string(),
//!         description: String::new(),
//!         speakers: vec![],
//!     }).await?;
//!
//!     println!("{}", script);
//!     Ok(())
//! }
//! ```

mod cover;
mod error;
mod script;

pub use cover::{CoverArt, CoverArtConfig};
pub use error::{Error, Result};
pub use script::{ScriptRequest, ScriptSpeaker, ScriptWriter, ScriptWriterConfig};
