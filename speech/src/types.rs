//! Core data model for the synthesis pipeline.

use serde::{Deserialize, Serialize};

/// One contiguous span of script text attributed to a single speaker.
///
/// Produced by the parser in appearance order; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSegment {
    /// Speaker identifier as written in the marker (bold-marker slugs are
    /// lowercase; role-prefixed names keep their original casing and are
    /// normalized by the voice resolver).
    pub speaker: String,
    /// The spoken text, trimmed.
    pub text: String,
}

/// Speaker gender, as declared in the podcast's speaker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// User-declared speaker-to-voice assignment for one podcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    /// Display name; [`speaker_slug`] of this name is the lookup key the
    /// script markers use.
    pub name: String,
    /// Provider voice identifier, or the reserved clone sentinel.
    pub voice: String,
    /// Declared gender.
    pub gender: Gender,
}

/// Inbound synthesis request, mirroring the HTTP wire contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechOptions {
    /// The annotated script.
    pub text: String,
    /// Explicit speaker configuration; absent means the fixed role table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    /// Selects the explicit-speaker pipeline with per-segment codec
    /// normalization.
    pub use_aws_voice: bool,
    /// Cloned-voice handle consumed by the clone sentinel route.
    pub voice: String,
    /// BCP-47 language code; defaults to "en-US".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Speaking rate override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f64>,
    /// Pitch override in semitones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    /// Volume gain override in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_gain_db: Option<f64>,
}

/// Normalizes a speaker name into its lookup slug: whitespace stripped,
/// lowercased. "Host 1" and "host1" map to the same key.
pub fn speaker_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
