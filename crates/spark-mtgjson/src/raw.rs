//! Serde types for the MTGJSON AllPrintings document.
//!
//! This is an external, versioned third-party format: field names follow the
//! provider's camelCase convention and must be matched field-for-field. Every
//! card field is optional at this layer — presence requirements (the uuid)
//! are enforced during normalization, not deserialization, so one malformed
//! record can be reported with its name and set instead of failing the whole
//! parse.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level document: `{ meta, data: { <setCode>: RawSet } }`.
///
/// `BTreeMap` gives deterministic set iteration; row-level operations are
/// idempotent so the order is not significant to correctness.
#[derive(Debug, Clone, Deserialize)]
pub struct AllPrintings {
    #[serde(default)]
    pub meta: Option<DocumentMeta>,
    pub data: BTreeMap<String, RawSet>,
}

/// Provider metadata block at the top of the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// One set entry under `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSet {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, rename = "type")]
    pub set_type: Option<String>,
    #[serde(default)]
    pub total_set_size: Option<i64>,
    #[serde(default)]
    pub is_online_only: Option<bool>,
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

/// One card record as the provider ships it.
///
/// The provider omits false booleans and empty lists entirely, hence
/// `Option` everywhere; normalization turns absence into explicit
/// NULL/empty-array values for the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub set_code: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub mana_value: Option<f64>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default, rename = "type")]
    pub type_line: Option<String>,
    #[serde(default)]
    pub supertypes: Option<Vec<String>>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub defense: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub frame_version: Option<String>,
    #[serde(default)]
    pub watermark: Option<String>,
    #[serde(default)]
    pub security_stamp: Option<String>,
    #[serde(default)]
    pub edhrec_rank: Option<i64>,
    #[serde(default)]
    pub edhrec_saltiness: Option<f64>,
    #[serde(default)]
    pub is_reserved: Option<bool>,
    #[serde(default)]
    pub is_promo: Option<bool>,
    #[serde(default)]
    pub is_reprint: Option<bool>,
    #[serde(default)]
    pub is_full_art: Option<bool>,
    #[serde(default)]
    pub is_online_only: Option<bool>,
    #[serde(default)]
    pub is_textless: Option<bool>,
    #[serde(default)]
    pub has_foil: Option<bool>,
    #[serde(default)]
    pub has_non_foil: Option<bool>,
    #[serde(default)]
    pub identifiers: Option<serde_json::Value>,
    #[serde(default)]
    pub legalities: Option<serde_json::Value>,
    #[serde(default)]
    pub foreign_data: Option<serde_json::Value>,
    #[serde(default)]
    pub printings: Option<serde_json::Value>,
    #[serde(default)]
    pub variations: Option<serde_json::Value>,
    #[serde(default)]
    pub availability: Option<serde_json::Value>,
    #[serde(default)]
    pub finishes: Option<serde_json::Value>,
    #[serde(default)]
    pub booster_types: Option<serde_json::Value>,
    #[serde(default)]
    pub other_face_ids: Option<serde_json::Value>,
    #[serde(default)]
    pub purchase_urls: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AllPrintings;

    #[test]
    fn parses_provider_field_names() {
        let document: AllPrintings = serde_json::from_value(serde_json::json!({
            "meta": {"date": "2026-08-01", "version": "5.2.2"},
            "data": {
                "LEA": {
                    "name": "Limited Edition Alpha",
                    "code": "LEA",
                    "releaseDate": "1993-08-05",
                    "type": "core",
                    "totalSetSize": 295,
                    "cards": [{
                        "uuid": "u1",
                        "name": "Lightning Bolt",
                        "manaCost": "{R}",
                        "manaValue": 1.0,
                        "setCode": "LEA",
                        "type": "Instant",
                        "colorIdentity": ["R"],
                        "identifiers": {"scryfallId": "abc"},
                        "hasFoil": false
                    }]
                }
            }
        }))
        .unwrap();

        assert_eq!(document.meta.unwrap().version.as_deref(), Some("5.2.2"));
        let set = &document.data["LEA"];
        assert_eq!(set.release_date.as_deref(), Some("1993-08-05"));
        assert_eq!(set.set_type.as_deref(), Some("core"));

        let card = &set.cards[0];
        assert_eq!(card.mana_cost.as_deref(), Some("{R}"));
        assert_eq!(card.type_line.as_deref(), Some("Instant"));
        assert_eq!(card.color_identity.as_deref(), Some(&["R".to_string()][..]));
        assert_eq!(card.has_foil, Some(false));
        assert_eq!(card.is_promo, None, "omitted booleans stay absent here");
    }

    #[test]
    fn rejects_document_without_data_key() {
        let result: Result<AllPrintings, _> =
            serde_json::from_value(serde_json::json!({"meta": {}}));
        assert!(result.is_err());
    }
}
