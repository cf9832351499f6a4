//! Response helpers for the Gemini endpoint.
//!
//! Status handling (429 with `Retry-After`, other non-success codes with the
//! provider's error message) and a size-capped body read.

use serde::Deserialize;

use crate::error::AnalysisError;

/// Largest reply body accepted, in bytes.
pub const MAX_RESPONSE_LEN: usize = 1024 * 1024;

/// Longest raw body echoed into an [`AnalysisError::Api`] message.
const MAX_ERROR_BODY: usize = 300;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Check a response for rate limiting and non-success statuses.
///
/// - **429** → [`AnalysisError::RateLimited`], honouring `Retry-After`
///   (60 s when absent or unparseable).
/// - **other non-success** → [`AnalysisError::Api`] with the provider's
///   `error.message` when the body carries one. The body is read under the
///   same [`MAX_RESPONSE_LEN`] cap as a successful reply.
pub async fn check_response(
    resp: reqwest::Response,
    timeout_secs: u64,
) -> Result<reqwest::Response, AnalysisError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AnalysisError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let message = match read_limited(resp, timeout_secs).await {
            Ok(body) => error_message(&String::from_utf8_lossy(&body)),
            Err(e) => e.to_string(),
        };
        return Err(AnalysisError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Read the whole body, failing once it grows past [`MAX_RESPONSE_LEN`].
pub async fn read_limited(
    mut resp: reqwest::Response,
    timeout_secs: u64,
) -> Result<Vec<u8>, AnalysisError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = resp
        .chunk()
        .await
        .map_err(|e| AnalysisError::transport(e, timeout_secs))?
    {
        let total = bytes.len() + chunk.len();
        if total > MAX_RESPONSE_LEN {
            return Err(AnalysisError::TooLarge {
                bytes: total,
                limit: MAX_RESPONSE_LEN,
            });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let ErrorBody { message, status } = envelope.error;
        return match status {
            Some(status) if !message.is_empty() => format!("{status}: {message}"),
            Some(status) => status,
            None => message,
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::from("empty response body");
    }
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
