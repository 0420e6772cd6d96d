//! Rarity lookup over the bulk reference data.
//!
//! Indexes the same AllPrintings document the importer consumes, keyed three
//! ways for the specificity ladder: set code + collector number, then name
//! within a set, then name across all sets. Cross-set disagreements resolve
//! by the most frequent rarity; frequency ties go to the rarer value.

use std::collections::HashMap;
use std::path::Path;

use spark_core::enums::Rarity;
use spark_mtgjson::raw::AllPrintings;

use crate::error::RarityError;

pub struct BulkIndex {
    by_set_and_number: HashMap<(String, String), String>,
    by_set_and_name: HashMap<(String, String), Vec<String>>,
    by_name: HashMap<String, Vec<String>>,
}

impl BulkIndex {
    /// Build the index from an already-parsed document.
    #[must_use]
    pub fn from_document(document: &AllPrintings) -> Self {
        let mut by_set_and_number = HashMap::new();
        let mut by_set_and_name: HashMap<(String, String), Vec<String>> = HashMap::new();
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();

        for (code, set) in &document.data {
            let set_key = code.to_lowercase();
            for card in &set.cards {
                let Some(rarity) = card.rarity.as_deref().map(str::to_lowercase) else {
                    continue;
                };
                let Some(name) = card.name.as_deref().map(str::to_lowercase) else {
                    continue;
                };
                if let Some(number) = card.number.as_deref() {
                    by_set_and_number
                        .entry((set_key.clone(), number.to_lowercase()))
                        .or_insert_with(|| rarity.clone());
                }
                by_set_and_name
                    .entry((set_key.clone(), name.clone()))
                    .or_default()
                    .push(rarity.clone());
                by_name.entry(name).or_default().push(rarity);
            }
        }

        Self {
            by_set_and_number,
            by_set_and_name,
            by_name,
        }
    }

    /// Read and parse a bulk file from disk, then index it.
    ///
    /// # Errors
    ///
    /// Returns `RarityError` for unreadable files or malformed JSON.
    pub async fn load(path: &Path) -> Result<Self, RarityError> {
        let text = tokio::fs::read_to_string(path).await?;
        let document: AllPrintings = serde_json::from_str(&text)?;
        Ok(Self::from_document(&document))
    }

    /// Most specific match wins: set+number, then name within the set, then
    /// name across every set.
    #[must_use]
    pub fn lookup(
        &self,
        set_code: Option<&str>,
        number: Option<&str>,
        name: &str,
    ) -> Option<String> {
        let set_key = set_code.map(str::to_lowercase);
        let name_key = name.to_lowercase();

        if let (Some(set_key), Some(number)) = (set_key.as_deref(), number) {
            if let Some(rarity) = self
                .by_set_and_number
                .get(&(set_key.to_string(), number.to_lowercase()))
            {
                return Some(rarity.clone());
            }
        }

        if let Some(set_key) = set_key {
            if let Some(rarities) = self.by_set_and_name.get(&(set_key, name_key.clone())) {
                if let Some(rarity) = pick_most_common(rarities) {
                    return Some(rarity);
                }
            }
        }

        self.by_name.get(&name_key).and_then(|r| pick_most_common(r))
    }
}

/// Most frequent rarity; frequency ties break toward the rarer value
/// (mythic > rare > uncommon > common > special > basic). Rarity strings
/// the enum does not know sort below all known ones.
fn pick_most_common(rarities: &[String]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rarity in rarities {
        *counts.entry(rarity.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(rarity, count)| {
            let priority = Rarity::parse(rarity).map_or(0, Rarity::priority);
            (*count, priority)
        })
        .map(|(rarity, _)| rarity.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use spark_mtgjson::raw::AllPrintings;

    use super::BulkIndex;

    fn index() -> BulkIndex {
        let document: AllPrintings = serde_json::from_value(serde_json::json!({
            "data": {
                "LEA": {
                    "name": "Limited Edition Alpha",
                    "code": "LEA",
                    "cards": [
                        {"uuid": "u1", "name": "Lightning Bolt", "number": "161", "rarity": "common"},
                        {"uuid": "u2", "name": "Shivan Dragon", "number": "174", "rarity": "rare"}
                    ]
                },
                "MM2": {
                    "name": "Modern Masters 2015",
                    "code": "MM2",
                    "cards": [
                        {"uuid": "u3", "name": "Lightning Bolt", "number": "122", "rarity": "uncommon"},
                        {"uuid": "u4", "name": "Split Card", "number": "1", "rarity": "rare"}
                    ]
                },
                "MM3": {
                    "name": "Modern Masters 2017",
                    "code": "MM3",
                    "cards": [
                        {"uuid": "u5", "name": "Lightning Bolt", "number": "97", "rarity": "uncommon"},
                        {"uuid": "u6", "name": "Split Card", "number": "2", "rarity": "mythic"}
                    ]
                }
            }
        }))
        .unwrap();
        BulkIndex::from_document(&document)
    }

    #[test]
    fn set_and_number_is_most_specific() {
        let index = index();
        assert_eq!(
            index.lookup(Some("LEA"), Some("161"), "Lightning Bolt"),
            Some("common".to_string())
        );
        assert_eq!(
            index.lookup(Some("MM2"), Some("122"), "Lightning Bolt"),
            Some("uncommon".to_string())
        );
    }

    #[test]
    fn name_within_set_beats_cross_set() {
        let index = index();
        // Wrong collector number, but the name exists inside the set.
        assert_eq!(
            index.lookup(Some("LEA"), Some("999"), "Lightning Bolt"),
            Some("common".to_string())
        );
    }

    #[test]
    fn cross_set_match_uses_most_frequent_rarity() {
        let index = index();
        // Not in any set the card claims; two uncommon printings vs one
        // common — frequency wins.
        assert_eq!(
            index.lookup(Some("XXX"), None, "Lightning Bolt"),
            Some("uncommon".to_string())
        );
        assert_eq!(index.lookup(None, None, "Lightning Bolt"), Some("uncommon".to_string()));
    }

    #[test]
    fn frequency_ties_break_toward_rarer() {
        let index = index();
        // One rare printing, one mythic printing: mythic wins the tie.
        assert_eq!(
            index.lookup(None, None, "Split Card"),
            Some("mythic".to_string())
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = index();
        assert_eq!(
            index.lookup(Some("lea"), Some("161"), "LIGHTNING BOLT"),
            Some("common".to_string())
        );
    }

    #[test]
    fn unknown_name_misses() {
        let index = index();
        assert_eq!(index.lookup(Some("LEA"), None, "Imaginary Card"), None);
    }
}
