use clap::Subcommand;

/// User entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Get a user by id.
    Get { id: String },
    /// Delete a user (their decks cascade away with them).
    Delete { id: String },
}
