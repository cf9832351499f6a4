//! `generateContent` request and reply shapes.
//!
//! Only the fields IdeaFlow reads are modelled; everything else in the reply
//! is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    pub contents: [Content<'a>; 1],
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
}

impl<'a> GenerateRequest<'a> {
    /// Single-turn request asking for a JSON reply.
    pub const fn json(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Finish reasons meaning the provider withheld the answer.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "RECITATION",
];

/// What a success reply boiled down to.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    Text(&'a str),
    Blocked(String),
    Empty,
}

impl GenerateResponse {
    /// Text of `candidates[0].content.parts[0]`, or why there is none.
    pub fn reply(&self) -> Reply<'_> {
        let Some(candidate) = self.candidates.first() else {
            return self
                .prompt_feedback
                .as_ref()
                .and_then(|fb| fb.block_reason.clone())
                .map_or(Reply::Empty, Reply::Blocked);
        };

        let text = candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.trim().is_empty());

        match (text, candidate.finish_reason.as_deref()) {
            (Some(text), _) => Reply::Text(text),
            (None, Some(reason)) if BLOCKING_FINISH_REASONS.contains(&reason) => {
                Reply::Blocked(reason.to_string())
            }
            (None, _) => Reply::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::json("hello")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [{"text": "hello"}]}],
                "generationConfig": {"responseMimeType": "application/json"}
            })
        );
    }

    fn parse(value: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_part_text_is_the_reply() {
        let resp = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{}"}, {"text": "ignored"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 12}
        }));
        assert_eq!(resp.reply(), Reply::Text("{}"));
    }

    #[test]
    fn prompt_feedback_block_without_candidates() {
        let resp = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert_eq!(resp.reply(), Reply::Blocked("SAFETY".into()));
    }

    #[test]
    fn safety_finish_without_text_is_blocked() {
        let resp = parse(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert_eq!(resp.reply(), Reply::Blocked("SAFETY".into()));
    }

    #[test]
    fn no_candidates_is_empty() {
        assert_eq!(parse(json!({})).reply(), Reply::Empty);
        assert_eq!(parse(json!({"candidates": []})).reply(), Reply::Empty);
    }

    #[test]
    fn blank_text_is_empty() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}, "finishReason": "STOP"}]
        }));
        assert_eq!(resp.reply(), Reply::Empty);
    }
}
