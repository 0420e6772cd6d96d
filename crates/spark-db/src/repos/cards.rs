//! Card repository — full-row upserts, lookups, and backfill support queries.

use spark_core::entities::Card;

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, optional_json_to_text, parse_datetime, parse_optional_json, parse_string_list,
    string_list_to_text,
};

/// Per-batch upsert accounting. Written rows and skipped records both stay
/// inside the committed transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub written: u64,
    pub errors: u64,
}

/// Column list shared by every SELECT so `row_to_card` indexes stay aligned.
const CARD_COLUMNS: &str = "uuid, name, set_code, number, language, layout, side, mana_cost, \
     mana_value, rarity, type_line, supertypes, types, subtypes, colors, color_identity, \
     keywords, text, flavor_text, power, toughness, loyalty, defense, artist, border_color, \
     frame_version, watermark, security_stamp, edhrec_rank, edhrec_saltiness, is_reserved, \
     is_promo, is_reprint, is_full_art, is_online_only, is_textless, has_foil, has_non_foil, \
     identifiers, legalities, foreign_data, printings, variations, availability, finishes, \
     booster_types, other_face_ids, purchase_urls, created_at, updated_at";

/// Insert-or-replace keyed by the upstream uuid. On conflict every column is
/// overwritten from the incoming row (full-row replace, not a merge); only
/// `created_at` keeps its original value.
const UPSERT_CARD_SQL: &str = "INSERT INTO cards (uuid, name, set_code, number, language, layout, side, mana_cost, \
     mana_value, rarity, type_line, supertypes, types, subtypes, colors, color_identity, \
     keywords, text, flavor_text, power, toughness, loyalty, defense, artist, border_color, \
     frame_version, watermark, security_stamp, edhrec_rank, edhrec_saltiness, is_reserved, \
     is_promo, is_reprint, is_full_art, is_online_only, is_textless, has_foil, has_non_foil, \
     identifiers, legalities, foreign_data, printings, variations, availability, finishes, \
     booster_types, other_face_ids, purchase_urls, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, \
     ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34, \
     ?35, ?36, ?37, ?38, ?39, ?40, ?41, ?42, ?43, ?44, ?45, ?46, ?47, ?48, ?49, ?50) \
     ON CONFLICT(uuid) DO UPDATE SET \
     name = excluded.name, set_code = excluded.set_code, number = excluded.number, \
     language = excluded.language, layout = excluded.layout, side = excluded.side, \
     mana_cost = excluded.mana_cost, mana_value = excluded.mana_value, \
     rarity = excluded.rarity, type_line = excluded.type_line, \
     supertypes = excluded.supertypes, types = excluded.types, subtypes = excluded.subtypes, \
     colors = excluded.colors, color_identity = excluded.color_identity, \
     keywords = excluded.keywords, text = excluded.text, flavor_text = excluded.flavor_text, \
     power = excluded.power, toughness = excluded.toughness, loyalty = excluded.loyalty, \
     defense = excluded.defense, artist = excluded.artist, \
     border_color = excluded.border_color, frame_version = excluded.frame_version, \
     watermark = excluded.watermark, security_stamp = excluded.security_stamp, \
     edhrec_rank = excluded.edhrec_rank, edhrec_saltiness = excluded.edhrec_saltiness, \
     is_reserved = excluded.is_reserved, is_promo = excluded.is_promo, \
     is_reprint = excluded.is_reprint, is_full_art = excluded.is_full_art, \
     is_online_only = excluded.is_online_only, is_textless = excluded.is_textless, \
     has_foil = excluded.has_foil, has_non_foil = excluded.has_non_foil, \
     identifiers = excluded.identifiers, legalities = excluded.legalities, \
     foreign_data = excluded.foreign_data, printings = excluded.printings, \
     variations = excluded.variations, availability = excluded.availability, \
     finishes = excluded.finishes, booster_types = excluded.booster_types, \
     other_face_ids = excluded.other_face_ids, purchase_urls = excluded.purchase_urls, \
     updated_at = excluded.updated_at";

fn row_to_card(row: &libsql::Row) -> Result<Card, DatabaseError> {
    Ok(Card {
        uuid: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        set_code: get_opt_string(row, 2)?,
        number: get_opt_string(row, 3)?,
        language: get_opt_string(row, 4)?,
        layout: get_opt_string(row, 5)?,
        side: get_opt_string(row, 6)?,
        mana_cost: get_opt_string(row, 7)?,
        mana_value: row.get::<Option<f64>>(8)?,
        rarity: get_opt_string(row, 9)?,
        type_line: get_opt_string(row, 10)?,
        supertypes: parse_string_list(&row.get::<String>(11)?)?,
        types: parse_string_list(&row.get::<String>(12)?)?,
        subtypes: parse_string_list(&row.get::<String>(13)?)?,
        colors: parse_string_list(&row.get::<String>(14)?)?,
        color_identity: parse_string_list(&row.get::<String>(15)?)?,
        keywords: parse_string_list(&row.get::<String>(16)?)?,
        text: get_opt_string(row, 17)?,
        flavor_text: get_opt_string(row, 18)?,
        power: get_opt_string(row, 19)?,
        toughness: get_opt_string(row, 20)?,
        loyalty: get_opt_string(row, 21)?,
        defense: get_opt_string(row, 22)?,
        artist: get_opt_string(row, 23)?,
        border_color: get_opt_string(row, 24)?,
        frame_version: get_opt_string(row, 25)?,
        watermark: get_opt_string(row, 26)?,
        security_stamp: get_opt_string(row, 27)?,
        edhrec_rank: row.get::<Option<i64>>(28)?,
        edhrec_saltiness: row.get::<Option<f64>>(29)?,
        is_reserved: row.get::<i64>(30)? != 0,
        is_promo: row.get::<i64>(31)? != 0,
        is_reprint: row.get::<i64>(32)? != 0,
        is_full_art: row.get::<i64>(33)? != 0,
        is_online_only: row.get::<i64>(34)? != 0,
        is_textless: row.get::<i64>(35)? != 0,
        has_foil: row.get::<i64>(36)? != 0,
        has_non_foil: row.get::<i64>(37)? != 0,
        identifiers: parse_optional_json(get_opt_string(row, 38)?.as_deref())?,
        legalities: parse_optional_json(get_opt_string(row, 39)?.as_deref())?,
        foreign_data: parse_optional_json(get_opt_string(row, 40)?.as_deref())?,
        printings: parse_optional_json(get_opt_string(row, 41)?.as_deref())?,
        variations: parse_optional_json(get_opt_string(row, 42)?.as_deref())?,
        availability: parse_optional_json(get_opt_string(row, 43)?.as_deref())?,
        finishes: parse_optional_json(get_opt_string(row, 44)?.as_deref())?,
        booster_types: parse_optional_json(get_opt_string(row, 45)?.as_deref())?,
        other_face_ids: parse_optional_json(get_opt_string(row, 46)?.as_deref())?,
        purchase_urls: parse_optional_json(get_opt_string(row, 47)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(48)?)?,
        updated_at: parse_datetime(&row.get::<String>(49)?)?,
    })
}

fn card_params(card: &Card) -> Result<Vec<libsql::Value>, DatabaseError> {
    Ok(vec![
        card.uuid.as_str().into(),
        card.name.as_str().into(),
        card.set_code.as_deref().into(),
        card.number.as_deref().into(),
        card.language.as_deref().into(),
        card.layout.as_deref().into(),
        card.side.as_deref().into(),
        card.mana_cost.as_deref().into(),
        card.mana_value.into(),
        card.rarity.as_deref().into(),
        card.type_line.as_deref().into(),
        string_list_to_text(&card.supertypes)?.into(),
        string_list_to_text(&card.types)?.into(),
        string_list_to_text(&card.subtypes)?.into(),
        string_list_to_text(&card.colors)?.into(),
        string_list_to_text(&card.color_identity)?.into(),
        string_list_to_text(&card.keywords)?.into(),
        card.text.as_deref().into(),
        card.flavor_text.as_deref().into(),
        card.power.as_deref().into(),
        card.toughness.as_deref().into(),
        card.loyalty.as_deref().into(),
        card.defense.as_deref().into(),
        card.artist.as_deref().into(),
        card.border_color.as_deref().into(),
        card.frame_version.as_deref().into(),
        card.watermark.as_deref().into(),
        card.security_stamp.as_deref().into(),
        card.edhrec_rank.into(),
        card.edhrec_saltiness.into(),
        i64::from(card.is_reserved).into(),
        i64::from(card.is_promo).into(),
        i64::from(card.is_reprint).into(),
        i64::from(card.is_full_art).into(),
        i64::from(card.is_online_only).into(),
        i64::from(card.is_textless).into(),
        i64::from(card.has_foil).into(),
        i64::from(card.has_non_foil).into(),
        optional_json_to_text(card.identifiers.as_ref())?.into(),
        optional_json_to_text(card.legalities.as_ref())?.into(),
        optional_json_to_text(card.foreign_data.as_ref())?.into(),
        optional_json_to_text(card.printings.as_ref())?.into(),
        optional_json_to_text(card.variations.as_ref())?.into(),
        optional_json_to_text(card.availability.as_ref())?.into(),
        optional_json_to_text(card.finishes.as_ref())?.into(),
        optional_json_to_text(card.booster_types.as_ref())?.into(),
        optional_json_to_text(card.other_face_ids.as_ref())?.into(),
        optional_json_to_text(card.purchase_urls.as_ref())?.into(),
        card.created_at.to_rfc3339().into(),
        card.updated_at.to_rfc3339().into(),
    ])
}

impl SparkDb {
    /// Upsert a batch of cards inside one transaction.
    ///
    /// Each record is written independently: a failed record is logged with
    /// its name and uuid, counted in `errors`, and the loop continues. The
    /// transaction commits either way, so the batch's successful rows are
    /// durable even when some records were skipped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` only for transaction begin/commit failures;
    /// per-record failures are absorbed into the outcome.
    pub async fn upsert_cards(&self, cards: &[Card]) -> Result<BatchOutcome, DatabaseError> {
        let tx = self.conn().transaction().await?;
        let mut outcome = BatchOutcome::default();

        for card in cards {
            let params = match card_params(card) {
                Ok(params) => params,
                Err(error) => {
                    tracing::warn!(name = %card.name, uuid = %card.uuid, %error,
                        "failed to encode card row; skipping record");
                    outcome.errors += 1;
                    continue;
                }
            };
            match tx
                .execute(UPSERT_CARD_SQL, libsql::params_from_iter(params))
                .await
            {
                Ok(_) => outcome.written += 1,
                Err(error) => {
                    tracing::warn!(name = %card.name, uuid = %card.uuid, %error,
                        "card upsert failed; skipping record");
                    outcome.errors += 1;
                }
            }
        }

        tx.commit().await?;
        Ok(outcome)
    }

    /// Fetch one card by its upstream uuid.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the uuid is unknown.
    pub async fn get_card(&self, uuid: &str) -> Result<Card, DatabaseError> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE uuid = ?1");
        let mut rows = self.conn().query(&sql, [uuid]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_card(&row)
    }

    /// Total number of card rows.
    pub async fn card_count(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM cards", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// All cards in case-insensitive name order, up to `limit`. Used for the
    /// unscored (empty-query) search listing.
    pub async fn list_cards_alphabetical(&self, limit: u32) -> Result<Vec<Card>, DatabaseError> {
        let sql = format!(
            "SELECT {CARD_COLUMNS} FROM cards ORDER BY lower(name), name LIMIT {limit}"
        );
        let mut rows = self.conn().query(&sql, ()).await?;

        let mut cards = Vec::new();
        while let Some(row) = rows.next().await? {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }

    /// Candidate rows for ranked search: every card whose name contains all
    /// of `tokens` as case-insensitive substrings. The ranker re-orders the
    /// result in memory, so `cap` only bounds the working set.
    pub async fn candidates_by_tokens(
        &self,
        tokens: &[String],
        cap: u32,
    ) -> Result<Vec<Card>, DatabaseError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut clauses = Vec::with_capacity(tokens.len());
        let mut params: Vec<libsql::Value> = Vec::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            clauses.push(format!("lower(name) LIKE ?{}", idx + 1));
            params.push(format!("%{}%", token.to_lowercase()).into());
        }
        let sql = format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE {} LIMIT {cap}",
            clauses.join(" AND ")
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next().await? {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }

    /// Cards whose rarity column is NULL or empty, for the backfill run.
    pub async fn cards_missing_rarity(&self) -> Result<Vec<Card>, DatabaseError> {
        let sql = format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE rarity IS NULL OR rarity = '' ORDER BY uuid"
        );
        let mut rows = self.conn().query(&sql, ()).await?;

        let mut cards = Vec::new();
        while let Some(row) = rows.next().await? {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }

    /// Write a resolved rarity for one card and refresh its update timestamp.
    pub async fn update_card_rarity(
        &self,
        uuid: &str,
        rarity: &str,
        updated_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "UPDATE cards SET rarity = ?2, updated_at = ?3 WHERE uuid = ?1",
                libsql::params![uuid, rarity, updated_at.to_rfc3339()],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use spark_core::entities::Card;

    use super::BatchOutcome;
    use crate::SparkDb;

    async fn test_db() -> SparkDb {
        SparkDb::open_local(":memory:").await.unwrap()
    }

    fn sample_card(uuid: &str, name: &str) -> Card {
        let mut card = Card::new(uuid, name, Utc::now());
        card.set_code = Some("LEA".to_string());
        card.number = Some("161".to_string());
        card.mana_cost = Some("{R}".to_string());
        card.mana_value = Some(1.0);
        card.rarity = Some("common".to_string());
        card.type_line = Some("Instant".to_string());
        card.types = vec!["Instant".to_string()];
        card.colors = vec!["R".to_string()];
        card.text = Some("Lightning Bolt deals 3 damage to any target.".to_string());
        card.identifiers = Some(serde_json::json!({"scryfallId": "abc-123"}));
        card.legalities = Some(serde_json::json!({"vintage": "Legal"}));
        card.has_foil = true;
        card
    }

    #[tokio::test]
    async fn upsert_and_get_round_trip() {
        let db = test_db().await;
        let card = sample_card("u1", "Lightning Bolt");

        let outcome = db.upsert_cards(std::slice::from_ref(&card)).await.unwrap();
        assert_eq!(
            outcome,
            BatchOutcome {
                written: 1,
                errors: 0
            }
        );

        let fetched = db.get_card("u1").await.unwrap();
        assert_eq!(fetched.name, "Lightning Bolt");
        assert_eq!(fetched.set_code.as_deref(), Some("LEA"));
        assert_eq!(fetched.mana_value, Some(1.0));
        assert_eq!(fetched.types, vec!["Instant".to_string()]);
        assert!(fetched.has_foil);
        assert!(!fetched.is_promo);
        assert_eq!(
            fetched.identifiers.unwrap()["scryfallId"],
            serde_json::json!("abc-123")
        );
    }

    #[tokio::test]
    async fn upsert_twice_is_idempotent() {
        let db = test_db().await;
        let card = sample_card("u1", "Lightning Bolt");

        db.upsert_cards(std::slice::from_ref(&card)).await.unwrap();
        let first = db.get_card("u1").await.unwrap();

        db.upsert_cards(std::slice::from_ref(&card)).await.unwrap();
        let second = db.get_card("u1").await.unwrap();

        assert_eq!(db.card_count().await.unwrap(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn upsert_replaces_every_column() {
        let db = test_db().await;
        let card = sample_card("u1", "Lightning Bolt");
        db.upsert_cards(std::slice::from_ref(&card)).await.unwrap();

        let mut replacement = sample_card("u1", "Lightning Bolt");
        replacement.rarity = Some("uncommon".to_string());
        replacement.text = None;
        replacement.colors = Vec::new();
        db.upsert_cards(std::slice::from_ref(&replacement))
            .await
            .unwrap();

        let fetched = db.get_card("u1").await.unwrap();
        assert_eq!(fetched.rarity.as_deref(), Some("uncommon"));
        assert_eq!(fetched.text, None, "absent fields must overwrite to NULL");
        assert!(fetched.colors.is_empty());
        assert_eq!(db.card_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn candidates_require_every_token() {
        let db = test_db().await;
        for (uuid, name) in [
            ("u1", "Lightning Bolt"),
            ("u2", "Boltwing Hatchling"),
            ("u3", "Chain Lightning"),
        ] {
            db.upsert_cards(&[sample_card(uuid, name)]).await.unwrap();
        }

        let hits = db
            .candidates_by_tokens(&["bolt".to_string()], 100)
            .await
            .unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Lightning Bolt"));
        assert!(names.contains(&"Boltwing Hatchling"));
        assert!(!names.contains(&"Chain Lightning"));

        let hits = db
            .candidates_by_tokens(&["lightning".to_string(), "bolt".to_string()], 100)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Lightning Bolt");
    }

    #[tokio::test]
    async fn missing_rarity_listing_and_update() {
        let db = test_db().await;
        let mut unresolved = sample_card("u1", "Mystery Card");
        unresolved.rarity = None;
        db.upsert_cards(&[unresolved]).await.unwrap();
        db.upsert_cards(&[sample_card("u2", "Known Card")])
            .await
            .unwrap();

        let missing = db.cards_missing_rarity().await.unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].uuid, "u1");

        db.update_card_rarity("u1", "rare", Utc::now())
            .await
            .unwrap();
        assert!(db.cards_missing_rarity().await.unwrap().is_empty());
        assert_eq!(
            db.get_card("u1").await.unwrap().rarity.as_deref(),
            Some("rare")
        );
    }
}
