//! Gemini `generateContent` endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default API root (without the `/models/...` suffix).
fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

/// Default model used for enrichment.
fn default_model() -> String {
    String::from("gemini-2.5-flash-preview-09-2025")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key, passed as the `key` query parameter. Never checked in;
    /// comes from `GEMINI_API_KEY` or `IDEAFLOW_GEMINI__API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on one enrichment request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keeps the key out of `{:?}` output and logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Check if an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
