//! Podcast script drafting with the Gemini API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};

/// Default Gemini API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Script writer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptWriterConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Model name (e.g., "gemini-1.5-flash").
    pub model: String,
    /// API base URL override.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ScriptWriterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            base_url: None,
        }
    }
}

/// One declared speaker for prompt construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptSpeaker {
    /// Display name (e.g., "Sarah"); its whitespace-stripped lowercase form
    /// becomes the marker slug the model is told to emit.
    pub name: String,
    /// "male" or "female".
    pub gender: String,
}

/// Script drafting request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptRequest {
    /// Podcast topic.
    pub title: String,
    /// Optional context for the model.
    pub description: String,
    /// Explicit speaker roster; when empty the model is instructed to use
    /// the generic gender slugs (male1, female1, ...).
    pub speakers: Vec<ScriptSpeaker>,
}

/// Drafts speaker-annotated podcast scripts.
pub struct ScriptWriter {
    client: Client,
    config: ScriptWriterConfig,
}

impl ScriptWriter {
    /// Creates a new script writer.
    pub fn new(config: ScriptWriterConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self { client, config })
    }

    /// Generates a podcast script for the given topic.
    ///
    /// The prompt asks for bold speaker markers (`**male1:**`, `**sarah:**`)
    /// so the output feeds straight into the script parser.
    pub async fn generate(&self, req: &ScriptRequest) -> Result<String> {
        if req.title.trim().is_empty() {
            return Err(Error::Invalid("title must be non-empty".to_string()));
        }

        let prompt = build_prompt(req);
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            base, self.config.model, self.config.api_key
        );

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&bytes, status.as_u16()));
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        let script = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if script.trim().is_empty() {
            return Err(Error::EmptyOutput);
        }

        Ok(script)
    }
}

/// Builds the drafting prompt.
fn build_prompt(req: &ScriptRequest) -> String {
    let mut roles = String::new();

    if req.speakers.is_empty() {
        roles.push_str(
            "- Structure the script with clear speaker labels based on gender \
             (e.g., \"male1\", \"male2\", \"female1\", \"female2\") followed by their lines.\n\
             - If there are only male speakers, use \"male1:\", \"male2:\"; if only \
             female speakers, use \"female1\", \"female2\"; for mixed genders, use \
             \"male1\", \"female1\".\n",
        );
    } else {
        roles.push_str(&format!(
            "- We have {} people in this podcast.\n",
            req.speakers.len()
        ));
        for speaker in &req.speakers {
            let slug: String = speaker
                .name
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase();
            roles.push_str(&format!(
                "- {} is identified as {} and their gender is {}\n",
                speaker.name, slug, speaker.gender
            ));
        }
        roles.push_str("- For example, a speaker named Sarah is labelled **sarah**.\n");
    }

    let description = if req.description.trim().is_empty() {
        String::new()
    } else {
        format!(" Here is the description for context: {}.", req.description)
    };

    format!(
        "Write a podcast script for the topic: \"{}\".{}\n\
         - Start with a brief introduction to set the scene; do not repeat the title or description.\n\
         {}\
         - Always start a turn with ** around the lowercase speaker label.\n\
         - Create a natural, engaging conversation with back-and-forth exchanges.\n\
         - Keep each speaker's line concise (under 150 characters).\n\
         - Give each speaker a distinct personality and perspective.\n\
         - Exclude summaries or notes beyond the dialogue itself.\n\
         - Do not include more than 2 speakers in the conversation.\n",
        req.title.trim(),
        description,
        roles
    )
}

/// Parses an error response body (`{"error": {"message", "status"}}`).
fn parse_error(body: &[u8], http_status: u16) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        message: String,
        #[serde(default)]
        status: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        let message = if parsed.error.status.is_empty() {
            parsed.error.message
        } else {
            format!("{}: {}", parsed.error.status, parsed.error.message)
        };
        return Error::api(message, http_status);
    }

    Error::api(String::from_utf8_lossy(body).to_string(), http_status)
}

// ================== Response Types ==================

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod script_tests {
    use super::*;

    #[test]
    fn test_prompt_generic_roles() {
        let prompt = build_prompt(&ScriptRequest {
            title: "Coffee".to_string(),
            description: String::new(),
            speakers: vec![],
        });
        assert!(prompt.contains("male1"));
        assert!(prompt.contains("\"Coffee\""));
        assert!(!prompt.contains("description for context"));
    }

    #[test]
    fn test_prompt_named_speakers() {
        let prompt = build_prompt(&ScriptRequest {
            title: "Space".to_string(),
            description: "A tour of the solar system".to_string(),
            speakers: vec![
                ScriptSpeaker {
                    name: "Sarah Lee".to_string(),
                    gender: "female".to_string(),
                },
                ScriptSpeaker {
                    name: "Tom".to_string(),
                    gender: "male".to_string(),
                },
            ],
        });
        assert!(prompt.contains("sarahlee"));
        assert!(prompt.contains("2 people"));
        assert!(prompt.contains("solar system"));
    }

    #[test]
    fn test_response_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"**male1:** hi"},{"text":" there"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "**male1:** hi there");
    }

    #[test]
    fn test_parse_error_quota() {
        let body = br#"{"error":{"code":429,"message":"QUOTA_EXCEEDED: too many requests","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(parse_error(body, 429), Error::QuotaExceeded(_)));
    }
}
