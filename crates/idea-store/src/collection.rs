//! Pure collection operations. None of these touch the disk; callers pair
//! each durable mutation with [`crate::file::save`].

use idea_core::entities::{AiAnalysis, Idea};

/// Next id for a collection of `len` ideas.
#[must_use]
pub const fn next_id(len: usize) -> u64 {
    len as u64 + 1
}

/// Add `new_idea` at the end of the collection with `id = len + 1`.
///
/// Any id already carried by `new_idea` is overwritten.
#[must_use]
pub fn append(mut ideas: Vec<Idea>, mut new_idea: Idea) -> Vec<Idea> {
    new_idea.id = next_id(ideas.len());
    ideas.push(new_idea);
    ideas
}

/// Replace the analysis of the first idea titled exactly `title`.
///
/// Later ideas sharing the title are left untouched; an unknown title is a
/// no-op.
#[must_use]
pub fn update_analysis(mut ideas: Vec<Idea>, title: &str, analysis: AiAnalysis) -> Vec<Idea> {
    if let Some(idea) = ideas.iter_mut().find(|idea| idea.title == title) {
        idea.ai_analysis = Some(analysis);
    }
    ideas
}

/// First idea titled exactly `title`.
#[must_use]
pub fn find_by_title<'a>(ideas: &'a [Idea], title: &str) -> Option<&'a Idea> {
    ideas.iter().find(|idea| idea.title == title)
}
