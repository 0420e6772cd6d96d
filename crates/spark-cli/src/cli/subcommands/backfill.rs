use clap::Subcommand;

/// Backfill commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BackfillCommands {
    /// Resolve missing rarity values through the source chain.
    Rarity {
        /// Bulk reference file (defaults to the configured bulk path).
        #[arg(long)]
        bulk: Option<String>,
        /// Never consult the remote card API, even without bulk data.
        #[arg(long)]
        offline: bool,
    },
}
