use clap::Subcommand;

/// Archive commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArchiveCommands {
    /// List stored ideas (id, title, score).
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one idea with its ICE metrics and AI analysis.
    Show {
        /// Exact title; the first match is shown.
        title: String,
    },
}
