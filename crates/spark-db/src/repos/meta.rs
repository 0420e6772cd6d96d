//! Import metadata singleton.

use chrono::{DateTime, Utc};
use spark_core::entities::ImportMeta;

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

impl SparkDb {
    /// Write or replace the single bookkeeping row for a completed import.
    pub async fn write_import_meta(
        &self,
        total_cards: i64,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO import_meta (id, total_cards, description, updated_at)
                 VALUES (1, ?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                 total_cards = excluded.total_cards,
                 description = excluded.description,
                 updated_at = excluded.updated_at",
                libsql::params![total_cards, description, updated_at.to_rfc3339()],
            )
            .await?;
        Ok(())
    }

    /// The last completed import, if any run has finished.
    pub async fn get_import_meta(&self) -> Result<Option<ImportMeta>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT total_cards, description, updated_at FROM import_meta WHERE id = 1",
                (),
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        Ok(Some(ImportMeta {
            total_cards: row.get::<i64>(0)?,
            description: row.get::<String>(1)?,
            updated_at: parse_datetime(&row.get::<String>(2)?)?,
        }))
    }
}
