//! ICE prioritization score: Impact × Confidence × Ease ÷ 10.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Lowest accepted value for each ICE component.
pub const ICE_MIN: u8 = 1;

/// Highest accepted value for each ICE component.
pub const ICE_MAX: u8 = 10;

/// Default slider position for each component when the user gives none.
pub const ICE_DEFAULT: u8 = 5;

/// The three user-supplied ICE components, each in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IceScores {
    pub impact: u8,
    pub confidence: u8,
    pub ease: u8,
}

impl Default for IceScores {
    fn default() -> Self {
        Self {
            impact: ICE_DEFAULT,
            confidence: ICE_DEFAULT,
            ease: ICE_DEFAULT,
        }
    }
}

impl IceScores {
    /// Build a validated set of components.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming every component outside
    /// `[ICE_MIN, ICE_MAX]`.
    pub fn new(impact: u8, confidence: u8, ease: u8) -> Result<Self, CoreError> {
        let out_of_range: Vec<String> = [
            ("impact", impact),
            ("confidence", confidence),
            ("ease", ease),
        ]
        .into_iter()
        .filter(|(_, value)| !(ICE_MIN..=ICE_MAX).contains(value))
        .map(|(name, value)| format!("{name}={value}"))
        .collect();

        if !out_of_range.is_empty() {
            return Err(CoreError::Validation(format!(
                "ICE components must be between {ICE_MIN} and {ICE_MAX}: {}",
                out_of_range.join(", ")
            )));
        }

        Ok(Self {
            impact,
            confidence,
            ease,
        })
    }

    /// `(impact * confidence * ease) / 10`.
    #[must_use]
    pub fn score(self) -> f64 {
        let product =
            u16::from(self.impact) * u16::from(self.confidence) * u16::from(self.ease);
        f64::from(product) / 10.0
    }
}
