mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArchiveCommands;
use crate::context::AppContext;

/// Handle `ideaflow archive`.
pub fn handle(
    action: &ArchiveCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ArchiveCommands::List { limit } => list::run(*limit, ctx, flags),
        ArchiveCommands::Show { title } => show::run(title, ctx, flags),
    }
}
