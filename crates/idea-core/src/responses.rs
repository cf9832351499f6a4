//! CLI response types returned as JSON by `ideaflow` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardStats;
use crate::entities::{AiAnalysis, Idea};

/// Response from `ideaflow dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
}

/// Response from `ideaflow add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IdeaCreateResponse {
    pub idea: Idea,
}

/// One row of `ideaflow archive list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IdeaSummary {
    pub id: u64,
    pub title: String,
    pub score: f64,
    pub date: String,
    pub analyzed: bool,
}

impl From<&Idea> for IdeaSummary {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id,
            title: idea.title.clone(),
            score: idea.score,
            date: idea.date.clone(),
            analyzed: idea.is_analyzed(),
        }
    }
}

/// Response from `ideaflow archive show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IdeaDetailResponse {
    pub idea: Idea,
}

/// Response from `ideaflow analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub title: String,
    pub analysis: AiAnalysis,
    /// Whether an earlier analysis was replaced.
    pub replaced: bool,
}
