use clap::Subcommand;

/// Set reference-data commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SetCommands {
    /// List imported sets.
    List,
    /// Get one set by code.
    Get { code: String },
}
