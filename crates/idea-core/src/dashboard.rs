//! Summary statistics shown on the dashboard view.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Idea;

/// One bar of the ICE comparison chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreBar {
    pub title: String,
    pub score: f64,
}

/// Dashboard figures derived from the full collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStats {
    pub total_ideas: usize,
    /// Highest stored score, `None` for an empty collection.
    pub top_score: Option<f64>,
    /// Title of the highest-scored idea; the earliest one wins ties.
    pub best_idea: Option<String>,
    /// Scores in collection order.
    pub scores: Vec<ScoreBar>,
}

impl DashboardStats {
    #[must_use]
    pub fn from_ideas(ideas: &[Idea]) -> Self {
        let best = ideas.iter().fold(None::<&Idea>, |best, idea| match best {
            Some(current) if idea.score <= current.score => Some(current),
            _ => Some(idea),
        });

        Self {
            total_ideas: ideas.len(),
            top_score: best.map(|idea| idea.score),
            best_idea: best.map(|idea| idea.title.clone()),
            scores: ideas
                .iter()
                .map(|idea| ScoreBar {
                    title: idea.title.clone(),
                    score: idea.score,
                })
                .collect(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_ideas == 0
    }
}
