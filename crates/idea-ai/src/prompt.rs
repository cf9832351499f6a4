//! Prompt construction.

use idea_core::entities::Idea;

/// Build the enrichment prompt for `idea`.
///
/// Deterministic: the same idea always yields the same text. A missing
/// description is rendered as an empty line value.
#[must_use]
pub fn build_prompt(idea: &Idea) -> String {
    format!(
        "Analyze this business idea:\n\
         Title: {title}\n\
         Description: {description}\n\
         Problem: {problem}\n\
         Solution: {solution}\n\
         \n\
         Reply with pure JSON (no markdown) containing exactly these fields:\n\
         1. \"market_trends\": a short analysis of the relevant market trends (string).\n\
         2. \"risks\": a list of the 3 main risks, the reasons this idea could fail (array of 3 strings).\n\
         3. \"naming\": a list of 3 creative product names (array of 3 strings).\n\
         4. \"steps\": a list of the first 3 actions to take (array of 3 strings).\n",
        title = idea.title,
        description = idea.description_or_empty(),
        problem = idea.problem,
        solution = idea.solution,
    )
}
