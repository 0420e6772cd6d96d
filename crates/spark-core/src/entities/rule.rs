use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A numbered comprehensive-rules entry (e.g. `100.1a`).
///
/// Upserted by `rule_number`; the importer content-diffs against the stored
/// row and skips identical entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Rule {
    pub rule_number: String,
    pub text: String,
    /// `Example:` lines attached to this rule in the source text.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Ability words recognized in the rule text.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Leading chapter number, e.g. `"100"` for `100.1a`.
    pub chapter: String,
    pub updated_at: DateTime<Utc>,
}

impl Rule {
    /// Whether `other` carries the same content (everything but the timestamp).
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.rule_number == other.rule_number
            && self.text == other.text
            && self.examples == other.examples
            && self.keywords == other.keywords
            && self.chapter == other.chapter
    }
}
