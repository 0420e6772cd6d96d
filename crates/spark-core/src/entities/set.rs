use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A card set: read-only reference data grouping cards by a short code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CardSet {
    pub code: String,
    pub name: String,
    pub release_date: Option<String>,
    pub set_type: Option<String>,
    pub total_set_size: Option<i64>,
    #[serde(default)]
    pub is_online_only: bool,
    pub updated_at: DateTime<Utc>,
}
