use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SetCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &SetCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SetCommands::List => {
            let sets = ctx.db.list_sets().await?;
            output(&json!({ "sets": sets }), flags.format)
        }
        SetCommands::Get { code } => {
            let set = ctx.db.get_set(code).await?;
            output(&json!({ "set": set }), flags.format)
        }
    }
}
