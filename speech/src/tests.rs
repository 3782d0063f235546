//! End-to-end pipeline tests over a recording mock synthesizer.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    Error, Gender, Pipeline, Provider, Result, SegmentSynthesizer, Speaker, SpeechOptions,
    SynthesisParams, VoiceRoute,
};

/// Records every synthesis call and returns deterministic bytes derived
/// from the call, so assembled output encodes call order.
struct MockSynthesizer {
    calls: Mutex<Vec<(String, String, Provider)>>,
    fail_at: Option<usize>,
}

impl MockSynthesizer {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(call: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Some(call),
        }
    }

    fn calls(&self) -> Vec<(String, String, Provider)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SegmentSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        route: &VoiceRoute,
        _params: &SynthesisParams,
    ) -> Result<Vec<u8>> {
        let mut calls = self.calls.lock().unwrap();
        if self.fail_at == Some(calls.len()) {
            return Err(Error::provider("mock", "synthesis failed"));
        }
        calls.push((route.voice_id.clone(), text.to_string(), route.provider));
        Ok(format!("[{}|{}]", route.voice_id, text).into_bytes())
    }
}

fn speaker(name: &str, voice: &str, gender: Gender) -> Speaker {
    Speaker {
        name: name.to_string(),
        voice: voice.to_string(),
        gender,
    }
}

#[tokio::test]
async fn test_marked_script_end_to_end() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let options = SpeechOptions {
        text: "**male1:** Hello there\n**female1:** Hi!".to_string(),
        speakers: Some(vec![
            speaker("Male1", "v1", Gender::Male),
            speaker("Female1", "v2", Gender::Female),
        ]),
        ..Default::default()
    };

    let output = pipeline.run(&options).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "v1");
    assert_eq!(calls[0].1, "Hello there");
    assert_eq!(calls[1].0, "v2");
    assert_eq!(calls[1].1, "Hi!");

    // Assembly is plain in-order concatenation.
    assert_eq!(output.audio, b"[v1|Hello there][v2|Hi!]".to_vec());
    assert_eq!(output.duration_secs, 1);
}

#[tokio::test]
async fn test_role_script_uses_fixed_table() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let options = SpeechOptions {
        text: "Host 1: Welcome back.\nGuest: Thanks for having me.".to_string(),
        ..Default::default()
    };

    pipeline.run(&options).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "en-US-Neural2-D");
    assert_eq!(calls[1].0, "en-US-Neural2-C");
    assert!(calls.iter().all(|c| c.2 == Provider::CloudTts));
}

#[tokio::test]
async fn test_unknown_role_falls_back_to_default_voice() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let options = SpeechOptions {
        text: "Somebody: One line.".to_string(),
        ..Default::default()
    };

    pipeline.run(&options).await.unwrap();
    assert_eq!(mock.calls()[0].0, "en-US-Neural2-D");
}

#[tokio::test]
async fn test_clone_sentinel_routes_to_clone_provider() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let options = SpeechOptions {
        text: "**me:** My cloned line".to_string(),
        speakers: Some(vec![speaker("Me", "elevenlab", Gender::Male)]),
        voice: "cloned-handle".to_string(),
        ..Default::default()
    };

    pipeline.run(&options).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].2, Provider::VoiceClone);
    assert_eq!(calls[0].0, "elevenlab");
}

#[tokio::test]
async fn test_oversized_segment_is_chunked() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let sentence = "This sentence pads the segment well past the limit. ";
    let long_text = sentence.repeat(120); // ~6200 chars
    let options = SpeechOptions {
        text: format!("Narrator: {}", long_text.trim()),
        ..Default::default()
    };

    pipeline.run(&options).await.unwrap();

    let calls = mock.calls();
    assert!(calls.len() >= 2);
    assert!(calls.iter().all(|c| c.1.len() <= 4500));
    assert!(calls.iter().all(|c| c.0 == "en-US-Neural2-E"));
    // No text lost across the chunk boundary.
    let total: usize = calls.iter().map(|c| c.1.len()).sum();
    assert!(total >= long_text.trim().len() - calls.len());
}

#[tokio::test]
async fn test_clone_segments_are_not_chunked() {
    let mock = Arc::new(MockSynthesizer::new());
    let pipeline = Pipeline::new(mock.clone());

    let long = "A cloned sentence that keeps going on. ".repeat(160); // ~6200 chars
    let options = SpeechOptions {
        text: format!("**me:** {}", long.trim()),
        speakers: Some(vec![speaker("Me", "elevenlab", Gender::Male)]),
        voice: "cloned-handle".to_string(),
        ..Default::default()
    };

    pipeline.run(&options).await.unwrap();

    // One call carrying the whole segment, no sentence-boundary splitting.
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].2, Provider::VoiceClone);
    assert!(calls[0].1.len() > 4500);
}

#[tokio::test]
async fn test_failure_mid_synthesis_aborts() {
    let mock = Arc::new(MockSynthesizer::failing_at(1));
    let pipeline = Pipeline::new(mock.clone());

    let options = SpeechOptions {
        text: "**male1:** first\n**female1:** second\n**male1:** third".to_string(),
        speakers: Some(vec![
            speaker("Male1", "v1", Gender::Male),
            speaker("Female1", "v2", Gender::Female),
        ]),
        ..Default::default()
    };

    let err = pipeline.run(&options).await.unwrap_err();
    assert!(matches!(err, Error::Provider { .. }));
    // The failing call never recorded, and nothing after it ran.
    assert_eq!(mock.calls().len(), 1);
}

#[tokio::test]
async fn test_empty_text_rejected() {
    let pipeline = Pipeline::new(Arc::new(MockSynthesizer::new()));
    let options = SpeechOptions {
        text: "   \n ".to_string(),
        ..Default::default()
    };
    let err = pipeline.run(&options).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_marker_only_script_has_no_content() {
    let pipeline = Pipeline::new(Arc::new(MockSynthesizer::new()));
    let options = SpeechOptions {
        text: "**male1:**\n**female1:**".to_string(),
        speakers: Some(vec![
            speaker("Male1", "v1", Gender::Male),
            speaker("Female1", "v2", Gender::Female),
        ]),
        ..Default::default()
    };
    let err = pipeline.run(&options).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
