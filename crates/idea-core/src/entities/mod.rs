//! Entity structs for the IdeaFlow store file.
//!
//! Field names are the on-disk JSON keys. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod analysis;
mod idea;

pub use analysis::{ANALYSIS_LIST_LEN, AiAnalysis};
pub use idea::Idea;
