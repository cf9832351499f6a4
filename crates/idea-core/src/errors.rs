//! Cross-cutting error types for IdeaFlow.
//!
//! Domain-specific errors (`StoreError`, `AnalysisError`) are defined in
//! their respective crates. They converge into `anyhow` in `idea-cli`.

use thiserror::Error;

/// Errors that can be raised by any IdeaFlow crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} '{key}'")]
    NotFound { entity_type: String, key: String },

    /// Input failed validation (missing field, out-of-range score).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for an idea lookup miss.
    #[must_use]
    pub fn idea_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "idea".to_string(),
            key: key.into(),
        }
    }
}
