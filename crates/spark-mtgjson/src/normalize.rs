//! Raw-record to entity normalization.
//!
//! Maps the provider's camelCase record shape into the normalized row shape.
//! Absence becomes explicit here: missing scalars stay `None`, missing lists
//! become empty vectors, so the store receives a value for every column.

use chrono::{DateTime, Utc};
use spark_core::entities::{Card, CardSet};

use crate::error::ImportError;
use crate::raw::{RawCard, RawSet};

/// Normalize one raw card from `set`.
///
/// # Errors
///
/// Returns [`ImportError::MissingUuid`] when the record has no usable uuid.
/// This is fatal by contract: the uuid is the only stable foreign key
/// downstream entities rely on.
pub fn normalize_card(
    raw: &RawCard,
    set: &RawSet,
    now: DateTime<Utc>,
) -> Result<Card, ImportError> {
    let uuid = raw
        .uuid
        .as_deref()
        .map(str::trim)
        .filter(|uuid| !uuid.is_empty())
        .ok_or_else(|| ImportError::MissingUuid {
            name: raw.name.clone().unwrap_or_default(),
            set_code: set.code.clone(),
        })?;

    let mut card = Card::new(uuid, raw.name.clone().unwrap_or_default(), now);

    card.set_code = raw.set_code.clone().or_else(|| Some(set.code.clone()));
    card.number = raw.number.clone();
    card.language = raw.language.clone();
    card.layout = raw.layout.clone();
    card.side = raw.side.clone();

    card.mana_cost = raw.mana_cost.clone();
    card.mana_value = raw.mana_value;
    card.rarity = raw.rarity.clone();
    card.type_line = raw.type_line.clone();
    card.supertypes = raw.supertypes.clone().unwrap_or_default();
    card.types = raw.types.clone().unwrap_or_default();
    card.subtypes = raw.subtypes.clone().unwrap_or_default();
    card.colors = raw.colors.clone().unwrap_or_default();
    card.color_identity = raw.color_identity.clone().unwrap_or_default();
    card.keywords = raw.keywords.clone().unwrap_or_default();

    card.text = raw.text.clone();
    card.flavor_text = raw.flavor_text.clone();
    card.power = raw.power.clone();
    card.toughness = raw.toughness.clone();
    card.loyalty = raw.loyalty.clone();
    card.defense = raw.defense.clone();

    card.artist = raw.artist.clone();
    card.border_color = raw.border_color.clone();
    card.frame_version = raw.frame_version.clone();
    card.watermark = raw.watermark.clone();
    card.security_stamp = raw.security_stamp.clone();

    card.edhrec_rank = raw.edhrec_rank;
    card.edhrec_saltiness = raw.edhrec_saltiness;

    card.is_reserved = raw.is_reserved.unwrap_or(false);
    card.is_promo = raw.is_promo.unwrap_or(false);
    card.is_reprint = raw.is_reprint.unwrap_or(false);
    card.is_full_art = raw.is_full_art.unwrap_or(false);
    card.is_online_only = raw.is_online_only.unwrap_or(false);
    card.is_textless = raw.is_textless.unwrap_or(false);
    card.has_foil = raw.has_foil.unwrap_or(false);
    card.has_non_foil = raw.has_non_foil.unwrap_or(false);

    card.identifiers = raw.identifiers.clone();
    card.legalities = raw.legalities.clone();
    card.foreign_data = raw.foreign_data.clone();
    card.printings = raw.printings.clone();
    card.variations = raw.variations.clone();
    card.availability = raw.availability.clone();
    card.finishes = raw.finishes.clone();
    card.booster_types = raw.booster_types.clone();
    card.other_face_ids = raw.other_face_ids.clone();
    card.purchase_urls = raw.purchase_urls.clone();

    Ok(card)
}

/// Normalize a set entry into its reference-data row.
#[must_use]
pub fn normalize_set(raw: &RawSet, now: DateTime<Utc>) -> CardSet {
    CardSet {
        code: raw.code.clone(),
        name: raw.name.clone(),
        release_date: raw.release_date.clone(),
        set_type: raw.set_type.clone(),
        total_set_size: raw.total_set_size,
        is_online_only: raw.is_online_only.unwrap_or(false),
        updated_at: now,
    }
}
