//! Rarity and related enums for Spark Arcanum.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity as reported by the upstream data provider.
///
/// Ordered by scarcity for tie-breaking during rarity resolution: when two
/// candidate rarities occur equally often across printings, the rarer one
/// wins (`mythic > rare > uncommon > common > special > basic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Mythic,
    Rare,
    Uncommon,
    Common,
    Special,
    Basic,
}

impl Rarity {
    /// All rarities, rarest first.
    pub const ALL: &'static [Self] = &[
        Self::Mythic,
        Self::Rare,
        Self::Uncommon,
        Self::Common,
        Self::Special,
        Self::Basic,
    ];

    /// Return the string representation used in SQL storage and cache files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mythic => "mythic",
            Self::Rare => "rare",
            Self::Uncommon => "uncommon",
            Self::Common => "common",
            Self::Special => "special",
            Self::Basic => "basic",
        }
    }

    /// Tie-break priority: higher means rarer.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Mythic => 6,
            Self::Rare => 5,
            Self::Uncommon => 4,
            Self::Common => 3,
            Self::Special => 2,
            Self::Basic => 1,
        }
    }

    /// Parse a rarity string as the upstream provider spells it.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mythic" => Some(Self::Mythic),
            "rare" => Some(Self::Rare),
            "uncommon" => Some(Self::Uncommon),
            "common" => Some(Self::Common),
            "special" => Some(Self::Special),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Rarity;

    #[test]
    fn storage_strings_round_trip() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::parse(rarity.as_str()), Some(*rarity));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Rarity::parse("Mythic"), Some(Rarity::Mythic));
        assert_eq!(Rarity::parse(" RARE "), Some(Rarity::Rare));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Rarity::parse("timeshifted"), None);
        assert_eq!(Rarity::parse(""), None);
    }

    #[test]
    fn priority_orders_rarest_first() {
        let mut prev = u8::MAX;
        for rarity in Rarity::ALL {
            assert!(rarity.priority() < prev, "ALL must be rarest-first");
            prev = rarity.priority();
        }
    }
}
