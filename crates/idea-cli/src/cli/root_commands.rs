use clap::{Args, Subcommand, ValueEnum};
use idea_core::ice::{ICE_DEFAULT, ICE_MAX, ICE_MIN};

use crate::cli::subcommands::ArchiveCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Totals, best idea and the ICE score chart.
    Dashboard,
    /// Record a new idea.
    Add(AddArgs),
    /// Browse stored ideas.
    Archive {
        #[command(subcommand)]
        action: ArchiveCommands,
    },
    /// Ask the AI for market trends, risks, names and first steps.
    Analyze(AnalyzeArgs),
    /// Print the JSON Schema of a stored type.
    Schema(SchemaArgs),
}

/// Parser for one ICE slider, bounded to the valid range.
fn ice_value() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(i64::from(ICE_MIN)..=i64::from(ICE_MAX))
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    /// The problem the idea addresses.
    #[arg(long)]
    pub problem: String,
    /// The proposed solution.
    #[arg(long)]
    pub solution: String,
    #[arg(long, default_value_t = ICE_DEFAULT, value_parser = ice_value())]
    pub impact: u8,
    #[arg(long, default_value_t = ICE_DEFAULT, value_parser = ice_value())]
    pub confidence: u8,
    #[arg(long, default_value_t = ICE_DEFAULT, value_parser = ice_value())]
    pub ease: u8,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Exact title of the idea; the first match is analyzed.
    pub title: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    /// One stored idea.
    Idea,
    /// The AI analysis attached to an idea.
    Analysis,
    /// The whole ideas file.
    Store,
}
