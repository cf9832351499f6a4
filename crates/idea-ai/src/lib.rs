//! # idea-ai
//!
//! Gemini `generateContent` client that enriches one idea with market trends,
//! three risks, three names and three first steps.
//!
//! One call is exactly one request: no retries, no caching. Every failure
//! comes back as an [`AnalysisError`] and leaves the idea untouched; callers
//! attach the returned [`AiAnalysis`] themselves.

pub mod extract;
pub mod prompt;
pub mod wire;

mod error;
mod http;

pub use error::AnalysisError;
pub use crate::http::MAX_RESPONSE_LEN;

use std::time::Duration;

use idea_config::GeminiConfig;
use idea_core::entities::{AiAnalysis, Idea};

use crate::wire::{GenerateRequest, GenerateResponse, Reply};

const USER_AGENT: &str = concat!("ideaflow/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one endpoint, model and key.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotConfigured`] when no API key is set, or
    /// [`AnalysisError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, AnalysisError> {
        if !config.is_configured() {
            return Err(AnalysisError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AnalysisError::Http(e.without_url()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.trim().to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            urlencoding::encode(&self.model),
            urlencoding::encode(&self.api_key),
        )
    }

    /// Ask the model to analyze `idea`.
    ///
    /// # Errors
    ///
    /// Any [`AnalysisError`] other than `NotConfigured`.
    pub async fn analyze(&self, idea: &Idea) -> Result<AiAnalysis, AnalysisError> {
        let prompt = prompt::build_prompt(idea);
        tracing::debug!(
            id = idea.id,
            title = %idea.title,
            model = %self.model,
            prompt_len = prompt.len(),
            "requesting analysis"
        );

        let resp = self
            .http
            .post(self.endpoint())
            .json(&GenerateRequest::json(&prompt))
            .send()
            .await
            .map_err(|e| AnalysisError::transport(e, self.timeout_secs))?;
        let resp = crate::http::check_response(resp, self.timeout_secs).await?;
        let body = crate::http::read_limited(resp, self.timeout_secs).await?;

        let reply: GenerateResponse = serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::Parse(format!("unexpected reply envelope: {e}")))?;

        let result = match reply.reply() {
            Reply::Text(text) => parse_analysis(text),
            Reply::Blocked(reason) => Err(AnalysisError::Blocked { reason }),
            Reply::Empty => Err(AnalysisError::EmptyReply),
        };

        match &result {
            Ok(_) => tracing::debug!(id = idea.id, "analysis received"),
            Err(e) => tracing::warn!(id = idea.id, error = %e, "analysis reply rejected"),
        }
        result
    }
}

/// Decode and check the model's reply text.
///
/// The first JSON object in `text` is decoded into [`AiAnalysis`]; missing or
/// mistyped fields are a [`AnalysisError::Parse`], and lists that are not
/// exactly three items long are a [`AnalysisError::Schema`].
///
/// # Errors
///
/// See above.
pub fn parse_analysis(text: &str) -> Result<AiAnalysis, AnalysisError> {
    let object = extract::json_object(text)
        .ok_or_else(|| AnalysisError::Parse(String::from("no JSON object in reply")))?;
    let analysis: AiAnalysis =
        serde_json::from_str(object).map_err(|e| AnalysisError::Parse(e.to_string()))?;
    analysis
        .validate()
        .map_err(|e| AnalysisError::Schema(e.to_string()))?;
    Ok(analysis)
}
