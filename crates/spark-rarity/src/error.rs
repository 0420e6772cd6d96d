//! Rarity backfill error types.

use thiserror::Error;

use spark_db::error::DatabaseError;

/// Errors from the backfill run.
///
/// Remote lookup failures never appear here — they are swallowed as
/// "no answer" because a later chain step always exists.
#[derive(Debug, Error)]
pub enum RarityError {
    /// Cache or bulk file could not be read or written.
    #[error("Rarity cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Cache or bulk file contents are not the expected JSON shape.
    #[error("Malformed rarity data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The remote client could not be constructed.
    #[error("Remote client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fetching or updating card rows failed at the run level.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
