use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create {
            username,
            email,
            display_name,
        } => {
            let user = ctx
                .db
                .create_user(username, email, display_name.as_deref())
                .await?;
            output(&json!({ "user": user }), flags.format)
        }
        UserCommands::Get { id } => {
            let user = ctx.db.get_user(id).await?;
            output(&json!({ "user": user }), flags.format)
        }
        UserCommands::Delete { id } => {
            ctx.db.delete_user(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
