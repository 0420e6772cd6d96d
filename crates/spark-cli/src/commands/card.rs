use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CardCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &CardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CardCommands::Get { uuid } => {
            let card = ctx.db.get_card(uuid).await?;
            output(&json!({ "card": card }), flags.format)
        }
    }
}
