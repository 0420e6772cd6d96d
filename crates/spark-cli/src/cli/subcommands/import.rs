use clap::Subcommand;

/// Bulk import commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ImportCommands {
    /// Import the AllPrintings document into the card store.
    Cards {
        /// Source file (defaults to the configured bulk path).
        path: Option<String>,
        /// Fetch the bulk file from the configured endpoint first.
        #[arg(long)]
        download: bool,
        /// Records per transaction (defaults to the configured batch size).
        #[arg(long)]
        batch_size: Option<u32>,
    },
    /// Import the comprehensive-rules text dump.
    Rules {
        /// Path to the rules text file.
        path: String,
    },
}
