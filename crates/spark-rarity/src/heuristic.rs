//! Shape-based rarity guess, the terminal step of the resolution chain.
//!
//! Explicitly inferior to the data-driven sources: it only runs when the
//! cache, the bulk data, and (when reachable) the remote lookup all came up
//! empty.

use spark_core::entities::Card;
use spark_core::enums::Rarity;

const PERMANENT_TYPES: &[&str] = &[
    "creature",
    "artifact",
    "enchantment",
    "land",
    "planeswalker",
    "battle",
];

/// Infer a rarity from the card's shape.
///
/// Checked in order: basic land, other land, legendary permanent,
/// planeswalker, short mana cost, default. Legendary planeswalkers resolve
/// at the legendary-permanent step.
#[must_use]
pub fn infer_rarity(card: &Card) -> Rarity {
    let is_land = has_type(card, "land");
    if is_land && has_supertype(card, "basic") {
        return Rarity::Common;
    }
    if is_land {
        return Rarity::Uncommon;
    }
    if has_supertype(card, "legendary") && is_permanent(card) {
        return Rarity::Rare;
    }
    if has_type(card, "planeswalker") {
        return Rarity::Mythic;
    }
    if card
        .mana_cost
        .as_deref()
        .is_some_and(|cost| cost.chars().count() <= 3)
    {
        return Rarity::Common;
    }
    Rarity::Uncommon
}

fn is_permanent(card: &Card) -> bool {
    PERMANENT_TYPES.iter().any(|ty| has_type(card, ty))
}

/// Checks the structured type list first, falling back to the printed type
/// line for rows imported before the lists were populated.
fn has_type(card: &Card, ty: &str) -> bool {
    card.types.iter().any(|t| t.eq_ignore_ascii_case(ty))
        || type_line_contains(card, ty)
}

fn has_supertype(card: &Card, supertype: &str) -> bool {
    card.supertypes
        .iter()
        .any(|s| s.eq_ignore_ascii_case(supertype))
        || type_line_contains(card, supertype)
}

fn type_line_contains(card: &Card, word: &str) -> bool {
    card.type_line
        .as_deref()
        .is_some_and(|line| line.to_lowercase().contains(word))
}
