//! Enrichment error types.

use thiserror::Error;

/// Everything that can go wrong while enriching one idea.
///
/// All variants are recoverable: when one is returned, nothing has been
/// written and the idea is unchanged.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API key is configured.
    #[error("AI analysis is not configured: set GEMINI_API_KEY or IDEAFLOW_GEMINI__API_KEY")]
    NotConfigured,

    /// Transport failure. The request URL (which carries the key) is stripped.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// No reply within the configured timeout.
    #[error("AI request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider message, or a truncated body when none could be parsed.
        message: String,
    },

    /// The endpoint answered 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The provider refused to answer the prompt.
    #[error("prompt blocked by the provider ({reason})")]
    Blocked { reason: String },

    /// A success reply without any candidate text.
    #[error("AI reply contained no text")]
    EmptyReply,

    /// The reply text is not the expected JSON object.
    #[error("AI reply is not valid analysis JSON: {0}")]
    Parse(String),

    /// The reply decoded but breaks the three-items-per-list contract.
    #[error("AI reply does not match the analysis format: {0}")]
    Schema(String),

    /// The reply body exceeded the size cap.
    #[error("AI reply too large: {bytes} bytes (limit {limit})")]
    TooLarge { bytes: usize, limit: usize },
}

impl AnalysisError {
    /// Map a reqwest failure, separating timeouts and dropping the URL.
    pub(crate) fn transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { secs: timeout_secs }
        } else {
            Self::Http(err.without_url())
        }
    }
}
