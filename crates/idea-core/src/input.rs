//! Validated input for the "add idea" operation.

use crate::entities::Idea;
use crate::errors::CoreError;
use crate::ice::IceScores;

/// The five user inputs collected by the add form (the three ICE sliders
/// count as one group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdea {
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub ice: IceScores,
}

impl NewIdea {
    /// Check required text fields and the ICE ranges.
    ///
    /// Whitespace-only text counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] listing every missing field, or the
    /// out-of-range ICE components.
    pub fn validate(&self) -> Result<IceScores, CoreError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("problem", &self.problem),
            ("solution", &self.solution),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        IceScores::new(self.ice.impact, self.ice.confidence, self.ice.ease)
    }

    /// Turn validated input into a stored record.
    ///
    /// The `id` is left at `0`; it is assigned when the record is appended
    /// to a collection. `date` is taken as given so callers control the clock.
    ///
    /// # Errors
    ///
    /// Propagates [`NewIdea::validate`] failures.
    pub fn into_idea(self, date: String) -> Result<Idea, CoreError> {
        let ice = self.validate()?;
        Ok(Idea {
            id: 0,
            title: self.title,
            problem: self.problem,
            solution: self.solution,
            impact: ice.impact,
            confidence: ice.confidence,
            ease: ice.ease,
            score: ice.score(),
            date,
            ai_analysis: None,
            description: None,
        })
    }
}
