use clap::Subcommand;

/// Card entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CardCommands {
    /// Get a card by its upstream uuid.
    Get { uuid: String },
}
