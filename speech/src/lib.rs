//! Speaker-attributed script parsing and multi-voice audio assembly.
//!
//! This crate turns an annotated podcast script into one playable MP3:
//!
//! - [`parse`]: raw annotated text into ordered (speaker, text) segments
//! - [`VoiceTable`]: speaker identifiers into (voice, provider) routes
//! - [`SegmentSynthesizer`]: one provider round trip per segment
//! - [`Assembler`]: ordered byte concatenation plus a duration estimate
//! - [`Pipeline`]: parse → resolve → synthesize → assemble, strictly
//!   sequential, fail-fast
//!
//! # Example
//!
//! ```rust,ignore
//! use podforge_speech::{Pipeline, ProviderSynthesizer, SpeechOptions};
//!
//! let synth = ProviderSynthesizer::new(google_client, Some(eleven_client));
//! let pipeline = Pipeline::new(std::sync::Arc::new(synth));
//!
//! let out = pipeline.run(&SpeechOptions {
//!     text: "**male1:** Hello there\n**female1:** Hi!".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! // out.audio is the assembled MP3, out.duration_secs the estimate
//! ```

mod assemble;
mod chunk;
mod error;
mod pipeline;
mod script;
mod synth;
mod types;
mod voices;

pub use assemble::{AssembledAudio, Assembler, estimate_duration_secs};
pub use chunk::{MAX_CHUNK_CHARS, chunk_text};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, SpeechOutput};
pub use script::parse;
pub use synth::{ProviderSynthesizer, SegmentSynthesizer, SynthesisParams};
pub use types::{Gender, ScriptSegment, Speaker, SpeechOptions, speaker_slug};
pub use voices::{
    CLONE_VOICE_SENTINEL, DEFAULT_PROFILES, Provider, VoiceRoute, VoiceTable,
    resolve_with_speakers,
};

#[cfg(test)]
mod tests;
