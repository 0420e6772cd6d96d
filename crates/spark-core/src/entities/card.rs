use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single card printing, one row per printing.
///
/// `uuid` is the externally supplied primary key from the upstream data
/// provider; it is never generated locally. Every other downstream entity
/// references cards through it. Rows are immutable from the application's
/// perspective except for full-row replacement during re-import and the
/// rarity backfill writing into `rarity`.
///
/// Scalar fields that the source document omits are `None`; list-valued
/// fields are empty vectors. The store receives an explicit value for every
/// column on every write.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Card {
    pub uuid: String,
    pub name: String,

    pub set_code: Option<String>,
    pub number: Option<String>,
    pub language: Option<String>,
    pub layout: Option<String>,
    pub side: Option<String>,

    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    pub rarity: Option<String>,
    pub type_line: Option<String>,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,

    pub text: Option<String>,
    pub flavor_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub defense: Option<String>,

    pub artist: Option<String>,
    pub border_color: Option<String>,
    pub frame_version: Option<String>,
    pub watermark: Option<String>,
    pub security_stamp: Option<String>,

    pub edhrec_rank: Option<i64>,
    pub edhrec_saltiness: Option<f64>,

    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub is_promo: bool,
    #[serde(default)]
    pub is_reprint: bool,
    #[serde(default)]
    pub is_full_art: bool,
    #[serde(default)]
    pub is_online_only: bool,
    #[serde(default)]
    pub is_textless: bool,
    #[serde(default)]
    pub has_foil: bool,
    #[serde(default)]
    pub has_non_foil: bool,

    /// Provider-specific identifier map (scryfall id, multiverse id, ...).
    pub identifiers: Option<serde_json::Value>,
    /// Format name -> legality status.
    pub legalities: Option<serde_json::Value>,
    /// Translated names and text, one object per language.
    pub foreign_data: Option<serde_json::Value>,
    pub printings: Option<serde_json::Value>,
    pub variations: Option<serde_json::Value>,
    pub availability: Option<serde_json::Value>,
    pub finishes: Option<serde_json::Value>,
    pub booster_types: Option<serde_json::Value>,
    pub other_face_ids: Option<serde_json::Value>,
    pub purchase_urls: Option<serde_json::Value>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Minimal card with every optional column absent. Import normalization
    /// and tests build on this so a new column only needs one default.
    #[must_use]
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            set_code: None,
            number: None,
            language: None,
            layout: None,
            side: None,
            mana_cost: None,
            mana_value: None,
            rarity: None,
            type_line: None,
            supertypes: Vec::new(),
            types: Vec::new(),
            subtypes: Vec::new(),
            colors: Vec::new(),
            color_identity: Vec::new(),
            keywords: Vec::new(),
            text: None,
            flavor_text: None,
            power: None,
            toughness: None,
            loyalty: None,
            defense: None,
            artist: None,
            border_color: None,
            frame_version: None,
            watermark: None,
            security_stamp: None,
            edhrec_rank: None,
            edhrec_saltiness: None,
            is_reserved: false,
            is_promo: false,
            is_reprint: false,
            is_full_art: false,
            is_online_only: false,
            is_textless: false,
            has_foil: false,
            has_non_foil: false,
            identifiers: None,
            legalities: None,
            foreign_data: None,
            printings: None,
            variations: None,
            availability: None,
            finishes: None,
            booster_types: None,
            other_face_ids: None,
            purchase_urls: None,
            created_at: now,
            updated_at: now,
        }
    }
}
