use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One card line in a saved deck.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeckEntry {
    pub uuid: String,
    pub count: u32,
}

/// A user-owned deck list. `cards` is stored as a JSON array column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SavedDeck {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub cards: Vec<DeckEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
