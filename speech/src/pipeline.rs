//! The synthesis pipeline orchestrator.
//!
//! Strictly linear: parse → resolve → synthesize per segment → assemble. One
//! logical thread of control per invocation; segments are synthesized one
//! after another so output order trivially matches parse order. Any failure
//! at any stage is terminal: the error propagates to the caller and every
//! already-synthesized segment is discarded. There is no retry, no resume
//! and no cancellation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    assemble::Assembler,
    chunk::{MAX_CHUNK_CHARS, chunk_text},
    error::{Error, Result},
    script::parse,
    synth::{SegmentSynthesizer, SynthesisParams},
    types::SpeechOptions,
    voices::{Provider, VoiceRoute, VoiceTable, resolve_with_speakers},
};

/// The pipeline result handed to persistence or the HTTP layer.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    /// Assembled MP3 bytes.
    pub audio: Vec<u8>,
    /// Estimated duration in seconds.
    pub duration_secs: u64,
}

/// Sequences parsing, voice resolution, per-segment synthesis and assembly.
pub struct Pipeline {
    synthesizer: Arc<dyn SegmentSynthesizer>,
    voices: VoiceTable,
}

impl Pipeline {
    /// Creates a pipeline over a segment synthesizer, with the fixed default
    /// voice table.
    pub fn new(synthesizer: Arc<dyn SegmentSynthesizer>) -> Self {
        Self {
            synthesizer,
            voices: VoiceTable::default(),
        }
    }

    /// Replaces the injected voice table.
    pub fn with_voices(mut self, voices: VoiceTable) -> Self {
        self.voices = voices;
        self
    }

    /// Runs one synthesis request to completion.
    pub async fn run(&self, options: &SpeechOptions) -> Result<SpeechOutput> {
        if options.text.trim().is_empty() {
            return Err(Error::Validation("text content is required".to_string()));
        }

        debug!(stage = "parsing");
        let speakers = options.speakers.as_deref().unwrap_or(&[]);
        let segments = parse(&options.text, options.speakers.as_deref());
        if segments.is_empty() {
            return Err(Error::Validation(
                "no synthesizable content in script".to_string(),
            ));
        }

        // Pre-chunk oversized segments at sentence boundaries so no single
        // provider call exceeds the input limit.
        let mut work: Vec<(String, VoiceRoute)> = Vec::new();
        for segment in &segments {
            let route = if speakers.is_empty() {
                self.voices.resolve(&segment.speaker)
            } else {
                resolve_with_speakers(&segment.speaker, speakers, &self.voices)
            };
            if route.provider == Provider::VoiceClone {
                // The clone provider takes the whole segment in one call.
                work.push((segment.text.clone(), route));
            } else {
                for piece in chunk_text(&segment.text, MAX_CHUNK_CHARS) {
                    work.push((piece, route.clone()));
                }
            }
        }
        info!(
            segments = segments.len(),
            calls = work.len(),
            "parsed script"
        );

        let params = SynthesisParams {
            language: options
                .language
                .clone()
                .unwrap_or_else(|| "en-US".to_string()),
            speaking_rate: options.speaking_rate,
            pitch: options.pitch,
            volume_gain_db: options.volume_gain_db,
            clone_voice_id: options.voice.clone(),
        };

        let mut buffers = Vec::with_capacity(work.len());
        for (i, (text, route)) in work.iter().enumerate() {
            debug!(stage = "synthesis", segment = i, voice = %route.voice_id);
            let audio = self.synthesizer.synthesize(text, route, &params).await?;
            buffers.push(audio);
        }

        debug!(stage = "assembling");
        let assembled = Assembler::new(options.use_aws_voice)
            .assemble(buffers)
            .await?;

        info!(
            bytes = assembled.audio.len(),
            duration_secs = assembled.duration_secs,
            "synthesis complete"
        );

        Ok(SpeechOutput {
            audio: assembled.audio,
            duration_secs: assembled.duration_secs,
        })
    }
}
