//! # idea-core
//!
//! Core types, ICE scoring, and error types for IdeaFlow.
//!
//! This crate provides the foundational types shared across all IdeaFlow crates:
//! - Entity structs for the stored records ([`entities::Idea`], [`entities::AiAnalysis`])
//! - ICE score computation and range validation
//! - Creation input validation ([`input::NewIdea`])
//! - Dashboard statistics derived from a collection
//! - Cross-cutting error types
//! - CLI response types

pub mod dashboard;
pub mod entities;
pub mod errors;
pub mod ice;
pub mod input;
pub mod responses;
pub mod timestamp;
