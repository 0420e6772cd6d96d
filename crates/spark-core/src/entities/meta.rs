use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Singleton row describing the last completed bulk import.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportMeta {
    pub total_cards: i64,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}
