use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AiAnalysis;
use crate::ice::IceScores;

/// One entrepreneurial idea as stored in the ideas file.
///
/// `score` is computed once at creation and stored; it is never recomputed
/// from the components. `ai_analysis` is serialized as `null` until an
/// enrichment succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Idea {
    pub id: u64,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub impact: u8,
    pub confidence: u8,
    pub ease: u8,
    pub score: f64,
    pub date: String,
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysis>,
    /// Free-text description. Never written by IdeaFlow itself, but kept
    /// when a hand-edited file carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Idea {
    /// The ICE components as recorded at creation.
    #[must_use]
    pub const fn ice(&self) -> IceScores {
        IceScores {
            impact: self.impact,
            confidence: self.confidence,
            ease: self.ease,
        }
    }

    /// Whether an enrichment result is attached.
    #[must_use]
    pub const fn is_analyzed(&self) -> bool {
        self.ai_analysis.is_some()
    }

    /// Description text for prompts: empty when absent.
    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
