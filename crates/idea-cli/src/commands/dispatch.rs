use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Archive { action } => commands::archive::handle(&action, ctx, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}

/// Whether `command` mutates the ideas file and must hold the write lock.
#[must_use]
pub const fn requires_write_lock(command: &Commands) -> bool {
    match command {
        Commands::Add(_) | Commands::Analyze(_) => true,
        Commands::Dashboard | Commands::Archive { .. } | Commands::Schema(_) => false,
    }
}
