use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of items each list field of an analysis must carry.
pub const ANALYSIS_LIST_LEN: usize = 3;

/// Qualitative analysis attached to exactly one idea.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AiAnalysis {
    /// Short read on the market trends around the idea.
    pub market_trends: String,
    /// "Graveyard Test" risks: what would make the idea die.
    pub risks: Vec<String>,
    /// Name suggestions.
    pub naming: Vec<String>,
    /// First actions to take.
    pub steps: Vec<String>,
}

impl AiAnalysis {
    /// Check the three-item contract of the list fields.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming each list whose length is not
    /// [`ANALYSIS_LIST_LEN`] or that holds a blank item, or an empty
    /// `market_trends`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut problems: Vec<String> = [
            ("risks", &self.risks),
            ("naming", &self.naming),
            ("steps", &self.steps),
        ]
        .into_iter()
        .filter_map(|(name, items)| {
            if items.len() != ANALYSIS_LIST_LEN {
                Some(format!(
                    "'{name}' has {} items (expected {ANALYSIS_LIST_LEN})",
                    items.len()
                ))
            } else if items.iter().any(|item| item.trim().is_empty()) {
                Some(format!("'{name}' has blank items"))
            } else {
                None
            }
        })
        .collect();

        if self.market_trends.trim().is_empty() {
            problems.insert(0, "'market_trends' is empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }
}
