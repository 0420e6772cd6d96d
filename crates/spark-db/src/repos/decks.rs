//! Saved-deck repository — CRUD plus card-list editing.

use chrono::Utc;
use spark_core::entities::{DeckEntry, SavedDeck};

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

const PREFIX_DECK: &str = "dck";

fn parse_card_list(s: &str) -> Result<Vec<DeckEntry>, DatabaseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid deck card list: {e}")))
}

fn card_list_to_text(entries: &[DeckEntry]) -> Result<String, DatabaseError> {
    serde_json::to_string(entries)
        .map_err(|e| DatabaseError::Query(format!("Failed to serialize deck card list: {e}")))
}

fn row_to_deck(row: &libsql::Row) -> Result<SavedDeck, DatabaseError> {
    Ok(SavedDeck {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        format: get_opt_string(row, 3)?,
        description: get_opt_string(row, 4)?,
        cards: parse_card_list(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl SparkDb {
    /// Create an empty deck owned by `user_id`.
    pub async fn create_deck(
        &self,
        user_id: &str,
        name: &str,
        format: Option<&str>,
        description: Option<&str>,
    ) -> Result<SavedDeck, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_DECK).await?;

        self.conn()
            .execute(
                "INSERT INTO saved_decks (id, user_id, name, format, description, card_list, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, '[]', ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    user_id,
                    name,
                    format,
                    description,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(SavedDeck {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            format: format.map(String::from),
            description: description.map(String::from),
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch one deck by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the id is unknown.
    pub async fn get_deck(&self, id: &str) -> Result<SavedDeck, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, user_id, name, format, description, card_list, created_at, updated_at
                 FROM saved_decks WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_deck(&row)
    }

    /// All decks owned by one user, newest first.
    pub async fn list_decks_for_user(&self, user_id: &str) -> Result<Vec<SavedDeck>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, user_id, name, format, description, card_list, created_at, updated_at
                 FROM saved_decks WHERE user_id = ?1 ORDER BY created_at DESC, id",
                [user_id],
            )
            .await?;

        let mut decks = Vec::new();
        while let Some(row) = rows.next().await? {
            decks.push(row_to_deck(&row)?);
        }
        Ok(decks)
    }

    /// Delete one deck.
    pub async fn delete_deck(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM saved_decks WHERE id = ?1", [id])
            .await?;
        Ok(())
    }

    /// Add `count` copies of a card to a deck, merging with an existing line.
    pub async fn add_card_to_deck(
        &self,
        deck_id: &str,
        uuid: &str,
        count: u32,
    ) -> Result<SavedDeck, DatabaseError> {
        let mut deck = self.get_deck(deck_id).await?;

        if let Some(entry) = deck.cards.iter_mut().find(|entry| entry.uuid == uuid) {
            entry.count += count;
        } else {
            deck.cards.push(DeckEntry {
                uuid: uuid.to_string(),
                count,
            });
        }

        self.write_deck_cards(&mut deck).await?;
        Ok(deck)
    }

    /// Remove a card line from a deck entirely.
    pub async fn remove_card_from_deck(
        &self,
        deck_id: &str,
        uuid: &str,
    ) -> Result<SavedDeck, DatabaseError> {
        let mut deck = self.get_deck(deck_id).await?;
        deck.cards.retain(|entry| entry.uuid != uuid);
        self.write_deck_cards(&mut deck).await?;
        Ok(deck)
    }

    async fn write_deck_cards(&self, deck: &mut SavedDeck) -> Result<(), DatabaseError> {
        deck.updated_at = Utc::now();
        self.conn()
            .execute(
                "UPDATE saved_decks SET card_list = ?2, updated_at = ?3 WHERE id = ?1",
                libsql::params![
                    deck.id.as_str(),
                    card_list_to_text(&deck.cards)?,
                    deck.updated_at.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::SparkDb;
    use crate::error::DatabaseError;

    async fn db_with_user() -> (SparkDb, String) {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        let user = db.create_user("alice", "a@example.com", None).await.unwrap();
        (db, user.id)
    }

    #[tokio::test]
    async fn create_and_list_decks() {
        let (db, user_id) = db_with_user().await;
        db.create_deck(&user_id, "Mono Red", Some("modern"), None)
            .await
            .unwrap();
        db.create_deck(&user_id, "Esper Control", None, Some("slow"))
            .await
            .unwrap();

        let decks = db.list_decks_for_user(&user_id).await.unwrap();
        assert_eq!(decks.len(), 2);
        assert!(decks.iter().all(|deck| deck.user_id == user_id));
    }

    #[tokio::test]
    async fn deck_requires_existing_owner() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        let orphan = db.create_deck("usr-missing", "No Owner", None, None).await;
        assert!(matches!(orphan, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn add_card_merges_existing_line() {
        let (db, user_id) = db_with_user().await;
        let deck = db
            .create_deck(&user_id, "Mono Red", None, None)
            .await
            .unwrap();

        db.add_card_to_deck(&deck.id, "u1", 2).await.unwrap();
        let deck = db.add_card_to_deck(&deck.id, "u1", 2).await.unwrap();

        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].count, 4);

        let fetched = db.get_deck(&deck.id).await.unwrap();
        assert_eq!(fetched.cards, deck.cards);
    }

    #[tokio::test]
    async fn remove_card_drops_the_line() {
        let (db, user_id) = db_with_user().await;
        let deck = db
            .create_deck(&user_id, "Mono Red", None, None)
            .await
            .unwrap();
        db.add_card_to_deck(&deck.id, "u1", 4).await.unwrap();
        db.add_card_to_deck(&deck.id, "u2", 1).await.unwrap();

        let deck = db.remove_card_from_deck(&deck.id, "u1").await.unwrap();
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].uuid, "u2");
    }
}
