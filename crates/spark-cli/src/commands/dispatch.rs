use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Import { action } => commands::import::handle(&action, ctx, flags).await,
        Commands::Backfill { action } => commands::backfill::handle(&action, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Card { action } => commands::card::handle(&action, ctx, flags).await,
        Commands::Set { action } => commands::set::handle(&action, ctx, flags).await,
        Commands::Deck { action } => commands::deck::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
    }
}
