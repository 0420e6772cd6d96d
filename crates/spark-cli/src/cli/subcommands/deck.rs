use clap::Subcommand;

/// Saved-deck commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeckCommands {
    /// Create an empty deck for a user.
    Create {
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List a user's decks.
    List {
        #[arg(long)]
        user: String,
    },
    /// Get a deck by id.
    Get { id: String },
    /// Delete a deck.
    Delete { id: String },
    /// Add copies of a card to a deck.
    AddCard {
        id: String,
        uuid: String,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Remove a card line from a deck.
    RemoveCard { id: String, uuid: String },
}
