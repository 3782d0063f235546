//! Speaker-to-voice resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{Speaker, speaker_slug};

/// Reserved voice literal that routes a segment to the voice-cloning
/// provider instead of cloud TTS.
pub const CLONE_VOICE_SENTINEL: &str = "elevenlab";

/// Which external service synthesizes a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Cloud neural TTS (the default).
    CloudTts,
    /// Voice-cloning provider, selected by [`CLONE_VOICE_SENTINEL`].
    VoiceClone,
}

/// A resolved (voice, provider) pair for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceRoute {
    /// Provider voice identifier.
    pub voice_id: String,
    /// Backing service.
    pub provider: Provider,
}

impl VoiceRoute {
    fn for_voice(voice_id: String) -> Self {
        let provider = if voice_id == CLONE_VOICE_SENTINEL {
            Provider::VoiceClone
        } else {
            Provider::CloudTts
        };
        Self { voice_id, provider }
    }
}

/// Immutable speaker-role to voice mapping.
///
/// Keys are stored slug-normalized, so "Host 1" and "host1" resolve alike.
/// Unknown speakers fall back to the default role's voice rather than
/// erroring; no segment is ever dropped for lack of a voice.
#[derive(Debug, Clone)]
pub struct VoiceTable {
    roles: HashMap<String, String>,
    default_voice: String,
}

/// The fixed role table used when no explicit speakers are supplied. Role
/// keys cover both the role-prefixed convention (host1..narrator) and the
/// generic gender slugs of the bold-marker convention.
pub static DEFAULT_PROFILES: Lazy<VoiceTable> = Lazy::new(|| {
    VoiceTable::new(
        [
            ("host1", "en-US-Neural2-D"),   // male
            ("host2", "en-US-Neural2-F"),   // female
            ("host3", "en-US-Neural2-A"),   // male, different tone
            ("guest", "en-US-Neural2-C"),   // female, different tone
            ("narrator", "en-US-Neural2-E"),
            ("male1", "en-US-Neural2-D"),
            ("male2", "en-US-Neural2-A"),
            ("female1", "en-US-Neural2-F"),
            ("female2", "en-US-Neural2-C"),
        ],
        "en-US-Neural2-D",
    )
});

impl Default for VoiceTable {
    fn default() -> Self {
        DEFAULT_PROFILES.clone()
    }
}

impl VoiceTable {
    /// Builds a table from (role, voice) pairs and a fallback voice.
    pub fn new<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        default_voice: &str,
    ) -> Self {
        let roles = pairs
            .into_iter()
            .map(|(role, voice)| (speaker_slug(role), voice.to_string()))
            .collect();
        Self {
            roles,
            default_voice: default_voice.to_string(),
        }
    }

    /// Resolves a speaker identifier against the fixed role table.
    ///
    /// This never fails: unknown keys get the default voice.
    pub fn resolve(&self, speaker: &str) -> VoiceRoute {
        let voice = self
            .roles
            .get(&speaker_slug(speaker))
            .cloned()
            .unwrap_or_else(|| self.default_voice.clone());
        VoiceRoute::for_voice(voice)
    }
}

/// Resolves a speaker against an explicit configuration list.
///
/// A slug with no configured entry falls back to the first configured
/// speaker's voice; with an empty list the fixed table's default applies.
pub fn resolve_with_speakers(
    speaker: &str,
    speakers: &[Speaker],
    table: &VoiceTable,
) -> VoiceRoute {
    if speakers.is_empty() {
        return table.resolve(speaker);
    }

    let slug = speaker_slug(speaker);
    let voice = speakers
        .iter()
        .find(|s| speaker_slug(&s.name) == slug)
        .map(|s| s.voice.clone())
        .unwrap_or_else(|| speakers[0].voice.clone());

    VoiceRoute::for_voice(voice)
}

#[cfg(test)]
mod voices_tests {
    use super::*;
    use crate::types::Gender;

    fn speaker(name: &str, voice: &str) -> Speaker {
        Speaker {
            name: name.to_string(),
            voice: voice.to_string(),
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_fixed_table_roles() {
        let table = VoiceTable::default();
        assert_eq!(table.resolve("host2").voice_id, "en-US-Neural2-F");
        assert_eq!(table.resolve("Host 2").voice_id, "en-US-Neural2-F");
        assert_eq!(table.resolve("NARRATOR").voice_id, "en-US-Neural2-E");
        assert_eq!(table.resolve("female2").voice_id, "en-US-Neural2-C");
    }

    #[test]
    fn test_unknown_speaker_falls_back_to_default() {
        let table = VoiceTable::default();
        let route = table.resolve("zzz");
        assert_eq!(route.voice_id, "en-US-Neural2-D");
        assert_eq!(route.provider, Provider::CloudTts);
    }

    #[test]
    fn test_explicit_speakers_lookup() {
        let speakers = [speaker("Sarah Lee", "v1"), speaker("Tom", "v2")];
        let table = VoiceTable::default();
        assert_eq!(
            resolve_with_speakers("sarahlee", &speakers, &table).voice_id,
            "v1"
        );
        assert_eq!(resolve_with_speakers("tom", &speakers, &table).voice_id, "v2");
    }

    #[test]
    fn test_explicit_speakers_unknown_uses_first() {
        let speakers = [speaker("Sarah", "v1"), speaker("Tom", "v2")];
        let table = VoiceTable::default();
        assert_eq!(
            resolve_with_speakers("nobody", &speakers, &table).voice_id,
            "v1"
        );
    }

    #[test]
    fn test_clone_sentinel_selects_provider() {
        let speakers = [speaker("Me", CLONE_VOICE_SENTINEL)];
        let table = VoiceTable::default();
        let route = resolve_with_speakers("me", &speakers, &table);
        assert_eq!(route.provider, Provider::VoiceClone);
        assert_eq!(route.voice_id, CLONE_VOICE_SENTINEL);
    }
}
