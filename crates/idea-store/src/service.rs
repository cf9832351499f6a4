//! `IdeaService`: the in-memory collection paired with its backing file.
//!
//! Every mutation is applied in memory and then written through to disk
//! immediately. If the write fails the caller gets [`StoreError::Write`], but
//! the in-memory state still holds the mutation.

use std::path::{Path, PathBuf};

use idea_core::entities::{AiAnalysis, Idea};
use idea_core::input::NewIdea;
use idea_core::timestamp;

use crate::collection;
use crate::error::StoreError;
use crate::file;

pub struct IdeaService {
    path: PathBuf,
    ideas: Vec<Idea>,
}

impl IdeaService {
    /// Load the collection stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] or [`StoreError::Corrupt`] from [`file::load`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let ideas = file::load(&path)?;
        Ok(Self { path, ideas })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All ideas in storage order.
    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Idea> {
        collection::find_by_title(&self.ideas, title)
    }

    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Validate `input`, stamp it with the current local time, append it and
    /// save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for invalid input (nothing is mutated) or
    /// [`StoreError::Write`] if the save fails.
    pub fn create_idea(&mut self, input: NewIdea) -> Result<&Idea, StoreError> {
        self.create_idea_at(input, timestamp::now())
    }

    /// [`Self::create_idea`] with an explicit creation date string.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_idea`].
    pub fn create_idea_at(&mut self, input: NewIdea, date: String) -> Result<&Idea, StoreError> {
        let idea = input.into_idea(date)?;
        let ideas = std::mem::take(&mut self.ideas);
        self.ideas = collection::append(ideas, idea);

        let created = self.ideas.len();
        tracing::info!(id = created, path = %self.path.display(), "idea created");
        file::save(&self.path, &self.ideas)?;
        Ok(&self.ideas[created - 1])
    }

    /// Attach `analysis` to the first idea titled `title` and save.
    ///
    /// Returns `Ok(false)` without writing anything when no idea has that
    /// title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the save fails.
    pub fn attach_analysis(
        &mut self,
        title: &str,
        analysis: AiAnalysis,
    ) -> Result<bool, StoreError> {
        if self.find_by_title(title).is_none() {
            tracing::debug!(title, "no idea with this title, analysis not attached");
            return Ok(false);
        }

        let ideas = std::mem::take(&mut self.ideas);
        self.ideas = collection::update_analysis(ideas, title, analysis);
        tracing::info!(title, path = %self.path.display(), "analysis attached");
        file::save(&self.path, &self.ideas)?;
        Ok(true)
    }

    /// Discard in-memory state and re-read the file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open`].
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.ideas = file::load(&self.path)?;
        Ok(())
    }
}
