//! # idea-store
//!
//! Persistence for IdeaFlow. The whole idea collection lives in one JSON file
//! (an array, four-space indented) that is read in full on open and rewritten
//! in full on every mutation.
//!
//! The crate is split three ways:
//! - [`file`]: load and atomic save of the backing file.
//! - [`collection`]: pure append/update operations on `Vec<Idea>`.
//! - [`service`]: [`IdeaService`], pairing the two with write-through saves.

pub mod collection;
pub mod error;
pub mod file;
pub mod service;

pub use error::StoreError;
pub use service::IdeaService;
