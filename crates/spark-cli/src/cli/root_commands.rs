use clap::{Args, Subcommand};

use super::subcommands::{
    BackfillCommands, CardCommands, DeckCommands, ImportCommands, SetCommands, UserCommands,
};

/// All `spk` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import bulk card data or the comprehensive rules.
    Import {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Backfill derived card fields.
    Backfill {
        #[command(subcommand)]
        action: BackfillCommands,
    },
    /// Ranked card name search.
    Search(SearchArgs),
    /// Card lookups.
    Card {
        #[command(subcommand)]
        action: CardCommands,
    },
    /// Set reference data.
    Set {
        #[command(subcommand)]
        action: SetCommands,
    },
    /// Saved-deck management.
    Deck {
        #[command(subcommand)]
        action: DeckCommands,
    },
    /// User management.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

/// Arguments for `spk search`.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Query text; empty lists cards alphabetically.
    #[arg(default_value = "")]
    pub query: String,

    /// Max results to return (defaults to the configured search limit).
    #[arg(short, long)]
    pub limit: Option<u32>,
}
