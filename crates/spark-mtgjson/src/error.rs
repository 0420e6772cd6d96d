//! Import error types.

use thiserror::Error;

use spark_db::error::DatabaseError;

/// Errors from the bulk import pipeline.
///
/// Everything here is fatal for the current run: per-record write failures
/// never surface as an `ImportError`, they are logged and counted in the
/// run summary instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Source file could not be read.
    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// Source document is not valid JSON or not the expected shape.
    #[error("Malformed source document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A card record arrived without its primary identifier. The uuid is the
    /// only stable key downstream rows rely on, so this record cannot be
    /// stored under any other name.
    #[error("Card '{name}' in set {set_code} is missing its uuid")]
    MissingUuid { name: String, set_code: String },

    /// Bulk-file download failed (network, status, or timeout).
    #[error("Bulk download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transaction-level database failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
