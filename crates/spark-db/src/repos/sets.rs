//! Card set repository.

use spark_core::entities::CardSet;

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

fn row_to_set(row: &libsql::Row) -> Result<CardSet, DatabaseError> {
    Ok(CardSet {
        code: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        release_date: get_opt_string(row, 2)?,
        set_type: get_opt_string(row, 3)?,
        total_set_size: row.get::<Option<i64>>(4)?,
        is_online_only: row.get::<i64>(5)? != 0,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl SparkDb {
    /// Insert or fully replace a set row, keyed by its short code.
    pub async fn upsert_set(&self, set: &CardSet) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO card_sets (code, name, release_date, set_type, total_set_size, is_online_only, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(code) DO UPDATE SET
                 name = excluded.name, release_date = excluded.release_date,
                 set_type = excluded.set_type, total_set_size = excluded.total_set_size,
                 is_online_only = excluded.is_online_only, updated_at = excluded.updated_at",
                libsql::params![
                    set.code.as_str(),
                    set.name.as_str(),
                    set.release_date.as_deref(),
                    set.set_type.as_deref(),
                    set.total_set_size,
                    i64::from(set.is_online_only),
                    set.updated_at.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }

    /// Fetch one set by code.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the code is unknown.
    pub async fn get_set(&self, code: &str) -> Result<CardSet, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT code, name, release_date, set_type, total_set_size, is_online_only, updated_at
                 FROM card_sets WHERE code = ?1",
                [code],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_set(&row)
    }

    /// All sets, ordered by code.
    pub async fn list_sets(&self) -> Result<Vec<CardSet>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT code, name, release_date, set_type, total_set_size, is_online_only, updated_at
                 FROM card_sets ORDER BY code",
                (),
            )
            .await?;

        let mut sets = Vec::new();
        while let Some(row) = rows.next().await? {
            sets.push(row_to_set(&row)?);
        }
        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use spark_core::entities::CardSet;

    use crate::SparkDb;

    fn sample_set(code: &str, name: &str) -> CardSet {
        CardSet {
            code: code.to_string(),
            name: name.to_string(),
            release_date: Some("1993-08-05".to_string()),
            set_type: Some("core".to_string()),
            total_set_size: Some(295),
            is_online_only: false,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn upsert_and_list_round_trip() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        db.upsert_set(&sample_set("LEA", "Limited Edition Alpha"))
            .await
            .unwrap();
        db.upsert_set(&sample_set("ARN", "Arabian Nights"))
            .await
            .unwrap();

        let sets = db.list_sets().await.unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].code, "ARN");
        assert_eq!(sets[1].code, "LEA");
    }

    #[tokio::test]
    async fn upsert_replaces_existing_row() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        db.upsert_set(&sample_set("LEA", "Alpha")).await.unwrap();

        let mut renamed = sample_set("LEA", "Limited Edition Alpha");
        renamed.total_set_size = Some(296);
        db.upsert_set(&renamed).await.unwrap();

        let fetched = db.get_set("LEA").await.unwrap();
        assert_eq!(fetched.name, "Limited Edition Alpha");
        assert_eq!(fetched.total_set_size, Some(296));
        assert_eq!(db.list_sets().await.unwrap().len(), 1);
    }
}
