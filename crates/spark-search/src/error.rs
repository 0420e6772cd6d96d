//! Search error types.

use thiserror::Error;

use spark_db::error::DatabaseError;

/// Errors from search orchestration.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query could not be used as given.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Candidate lookup failed in the database layer.
    #[error("Database error during search: {0}")]
    Database(#[from] DatabaseError),
}
