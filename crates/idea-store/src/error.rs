//! Store error types for idea-store.

use std::path::PathBuf;

use idea_core::errors::CoreError;
use thiserror::Error;

/// Errors from loading, saving, or mutating the ideas file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read (permissions, I/O).
    #[error("failed to read ideas file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a JSON array of ideas.
    #[error("ideas file {} is not a valid idea collection: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The full-file rewrite failed. The in-memory collection is still
    /// correct; only durability was lost.
    #[error("failed to write ideas file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input validation failed before anything was mutated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Whether this failure happened before any mutation took place.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }
}
