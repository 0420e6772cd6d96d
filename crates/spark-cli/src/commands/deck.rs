use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeckCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &DeckCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DeckCommands::Create {
            user,
            name,
            format,
            description,
        } => {
            let deck = ctx
                .db
                .create_deck(user, name, format.as_deref(), description.as_deref())
                .await?;
            output(&json!({ "deck": deck }), flags.format)
        }
        DeckCommands::List { user } => {
            let decks = ctx.db.list_decks_for_user(user).await?;
            output(&json!({ "decks": decks }), flags.format)
        }
        DeckCommands::Get { id } => {
            let deck = ctx.db.get_deck(id).await?;
            output(&json!({ "deck": deck }), flags.format)
        }
        DeckCommands::Delete { id } => {
            ctx.db.delete_deck(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
        DeckCommands::AddCard { id, uuid, count } => {
            // Surface unknown uuids before touching the deck row.
            let card = ctx.db.get_card(uuid).await?;
            let deck = ctx.db.add_card_to_deck(id, uuid, *count).await?;
            output(
                &json!({ "deck": deck, "added": { "uuid": uuid, "name": card.name, "count": count } }),
                flags.format,
            )
        }
        DeckCommands::RemoveCard { id, uuid } => {
            let deck = ctx.db.remove_card_from_deck(id, uuid).await?;
            output(&json!({ "deck": deck }), flags.format)
        }
    }
}
