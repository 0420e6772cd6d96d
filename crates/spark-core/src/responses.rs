//! CLI response types returned as JSON by `spk` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `spk import cards`, `spk backfill rarity`, and `spk search`. The import
//! and backfill summaries are the only row-level reporting surface: callers
//! get aggregate counts, individual record failures go to the tracing log.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate result of a bulk card import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of sets seen in the source document.
    pub sets: u64,
    /// Number of card records read from the source document.
    pub processed: u64,
    /// Number of rows successfully upserted.
    pub updated: u64,
    /// Number of records skipped after a per-record write failure.
    pub errors: u64,
}

/// Aggregate result of a comprehensive-rules import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RulesImportSummary {
    /// Number of rule entries parsed from the source text.
    pub processed: u64,
    /// Number of rows inserted or rewritten.
    pub updated: u64,
    /// Number of rows skipped because the stored content was identical.
    pub unchanged: u64,
    /// Number of entries skipped after a per-record write failure.
    pub errors: u64,
}

/// Aggregate result of a rarity backfill run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BackfillSummary {
    /// Number of cards examined (rows with a missing rarity).
    pub processed: u64,
    /// Number of rows whose rarity changed.
    pub updated: u64,
    /// Number of cards that could not be resolved or written.
    pub errors: u64,
}

/// A single ranked hit from `spk search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedCard {
    pub uuid: String,
    pub name: String,
    pub set_code: Option<String>,
    pub rarity: Option<String>,
    pub type_line: Option<String>,
    /// Relevance score; zero for unscored (empty-query) listings.
    pub score: i64,
}

/// Response from `spk search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedCardsResponse {
    pub query: String,
    pub results: Vec<RankedCard>,
    pub total_results: u32,
}
