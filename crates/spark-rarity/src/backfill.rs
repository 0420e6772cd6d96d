//! The backfill run: resolve and persist rarity for every card missing one.

use chrono::Utc;
use spark_core::entities::Card;
use spark_core::responses::BackfillSummary;
use spark_db::SparkDb;

use crate::bulk::BulkIndex;
use crate::cache::RarityCache;
use crate::error::RarityError;
use crate::heuristic::infer_rarity;
use crate::remote::RemoteClient;

/// Which chain step produced a resolution. Logged per card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RaritySource {
    Cache,
    BulkData,
    Remote,
    Heuristic,
}

impl RaritySource {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::BulkData => "bulk_data",
            Self::Remote => "remote",
            Self::Heuristic => "heuristic",
        }
    }
}

/// Resolve rarity for every card row missing one and persist the results.
///
/// The chain per card: cache, bulk data (when loaded), remote exact-name
/// lookup (only when no bulk data is available), shape heuristic. Every
/// resolution is written into the cache before the row update; the update
/// is skipped when the stored value already matches. The cache is flushed
/// once at the end of the run.
///
/// # Errors
///
/// Returns `RarityError` for run-level failures (listing rows, flushing the
/// cache). Individual row-update failures are logged, counted in `errors`,
/// and skipped.
pub async fn backfill_rarities(
    db: &SparkDb,
    cache: &mut RarityCache,
    bulk: Option<&BulkIndex>,
    remote: Option<&RemoteClient>,
) -> Result<BackfillSummary, RarityError> {
    let cards = db.cards_missing_rarity().await?;
    let mut summary = BackfillSummary::default();

    for card in &cards {
        summary.processed += 1;

        let (rarity, source) = resolve(card, cache, bulk, remote).await;
        tracing::debug!(uuid = %card.uuid, name = %card.name, %rarity,
            source = source.as_str(), "rarity resolved");

        cache.insert(&card.uuid, &rarity);

        if card.rarity.as_deref() == Some(rarity.as_str()) {
            continue;
        }
        match db.update_card_rarity(&card.uuid, &rarity, Utc::now()).await {
            Ok(()) => summary.updated += 1,
            Err(error) => {
                tracing::warn!(uuid = %card.uuid, name = %card.name, %error,
                    "failed to write resolved rarity; skipping row");
                summary.errors += 1;
            }
        }
    }

    cache.flush()?;

    tracing::info!(
        processed = summary.processed,
        updated = summary.updated,
        errors = summary.errors,
        "rarity backfill complete"
    );
    Ok(summary)
}

/// First source to answer wins. The heuristic terminates the chain, so
/// every card resolves to something.
async fn resolve(
    card: &Card,
    cache: &RarityCache,
    bulk: Option<&BulkIndex>,
    remote: Option<&RemoteClient>,
) -> (String, RaritySource) {
    if let Some(hit) = cache.get(&card.uuid) {
        return (hit.to_string(), RaritySource::Cache);
    }

    if let Some(bulk) = bulk {
        if let Some(rarity) = bulk.lookup(
            card.set_code.as_deref(),
            card.number.as_deref(),
            &card.name,
        ) {
            return (rarity, RaritySource::BulkData);
        }
    } else if let Some(remote) = remote {
        // Only reachable when bulk reference data was entirely unavailable.
        if let Some(rarity) = remote.rarity_by_name(&card.name).await {
            return (rarity, RaritySource::Remote);
        }
    }

    (
        infer_rarity(card).as_str().to_string(),
        RaritySource::Heuristic,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use spark_core::entities::Card;
    use spark_db::SparkDb;
    use spark_mtgjson::raw::AllPrintings;

    use super::backfill_rarities;
    use crate::bulk::BulkIndex;
    use crate::cache::RarityCache;

    async fn db_with(cards: Vec<Card>) -> SparkDb {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        db.upsert_cards(&cards).await.unwrap();
        db
    }

    fn temp_cache(dir: &tempfile::TempDir) -> RarityCache {
        RarityCache::load(dir.path().join("rarity.json")).unwrap()
    }

    fn unresolved(uuid: &str, name: &str, type_line: &str) -> Card {
        let mut card = Card::new(uuid, name, Utc::now());
        card.type_line = Some(type_line.to_string());
        card
    }

    fn bulk_with_bolt() -> BulkIndex {
        let document: AllPrintings = serde_json::from_value(serde_json::json!({
            "data": {
                "LEA": {
                    "name": "Limited Edition Alpha",
                    "code": "LEA",
                    "cards": [
                        {"uuid": "b1", "name": "Lightning Bolt", "number": "161", "rarity": "common"}
                    ]
                }
            }
        }))
        .unwrap();
        BulkIndex::from_document(&document)
    }

    #[tokio::test]
    async fn bulk_match_resolves_without_network() {
        let mut card = unresolved("u1", "Lightning Bolt", "Instant");
        card.set_code = Some("LEA".to_string());
        card.number = Some("161".to_string());
        let db = db_with(vec![card]).await;

        let dir = tempfile::tempdir().unwrap();
        let mut cache = temp_cache(&dir);
        let bulk = bulk_with_bolt();

        let summary = backfill_rarities(&db, &mut cache, Some(&bulk), None)
            .await
            .unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(
            db.get_card("u1").await.unwrap().rarity.as_deref(),
            Some("common")
        );
        assert_eq!(cache.get("u1"), Some("common"));
    }

    #[tokio::test]
    async fn cache_short_circuits_every_other_source() {
        // The cache says mythic; bulk data and the heuristic would both say
        // something else. Cache must win without being overridden.
        let mut card = unresolved("u1", "Lightning Bolt", "Instant");
        card.set_code = Some("LEA".to_string());
        card.number = Some("161".to_string());
        let db = db_with(vec![card]).await;

        let dir = tempfile::tempdir().unwrap();
        let mut cache = temp_cache(&dir);
        cache.insert("u1", "mythic");
        let bulk = bulk_with_bolt();

        let summary = backfill_rarities(&db, &mut cache, Some(&bulk), None)
            .await
            .unwrap();
        assert_eq!(summary.updated, 1);
        assert_eq!(
            db.get_card("u1").await.unwrap().rarity.as_deref(),
            Some("mythic")
        );
    }

    #[tokio::test]
    async fn heuristic_backstops_missing_sources() {
        // Absent from the (empty) bulk data, no remote client configured:
        // a legendary creature lands on rare via the heuristic and counts
        // as updated, not as an error.
        let card = unresolved("u1", "Imaginary Legend", "Legendary Creature — Spirit");
        let db = db_with(vec![card]).await;

        let dir = tempfile::tempdir().unwrap();
        let mut cache = temp_cache(&dir);

        let summary = backfill_rarities(&db, &mut cache, None, None).await.unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(
            db.get_card("u1").await.unwrap().rarity.as_deref(),
            Some("rare")
        );
        assert_eq!(cache.get("u1"), Some("rare"));
    }

    #[tokio::test]
    async fn second_run_processes_nothing_new() {
        let card = unresolved("u1", "Imaginary Legend", "Legendary Creature — Spirit");
        let db = db_with(vec![card]).await;

        let dir = tempfile::tempdir().unwrap();
        let mut cache = temp_cache(&dir);

        backfill_rarities(&db, &mut cache, None, None).await.unwrap();
        let second = backfill_rarities(&db, &mut cache, None, None).await.unwrap();
        assert_eq!(second.processed, 0, "resolved rows leave the work list");
        assert_eq!(second.updated, 0);
    }

    #[tokio::test]
    async fn resolutions_survive_a_cache_reload() {
        let card = unresolved("u1", "Imaginary Legend", "Legendary Creature — Spirit");
        let db = db_with(vec![card]).await;

        let dir = tempfile::tempdir().unwrap();
        let mut cache = temp_cache(&dir);
        backfill_rarities(&db, &mut cache, None, None).await.unwrap();

        let reloaded = temp_cache(&dir);
        assert_eq!(reloaded.get("u1"), Some("rare"));
    }
}
