//! Batched, idempotent import of the AllPrintings document and the
//! comprehensive-rules dump.

use std::path::Path;

use chrono::Utc;
use spark_core::entities::Card;
use spark_core::responses::{ImportSummary, RulesImportSummary};
use spark_db::SparkDb;
use spark_db::repos::RuleWriteOutcome;

use crate::error::ImportError;
use crate::normalize::{normalize_card, normalize_set};
use crate::raw::AllPrintings;
use crate::rules_text::parse_comprehensive_rules;

/// Read, parse, and import an AllPrintings document from disk.
///
/// # Errors
///
/// Fatal conditions only: unreadable file, malformed JSON, a card record
/// missing its uuid, or a transaction-level database failure. Batches
/// committed before the failure remain committed.
pub async fn import_all_printings(
    db: &SparkDb,
    path: &Path,
    batch_size: usize,
) -> Result<ImportSummary, ImportError> {
    let text = tokio::fs::read_to_string(path).await?;
    let document: AllPrintings = serde_json::from_str(&text)?;
    import_document(db, &document, batch_size).await
}

/// Import an already-parsed document.
///
/// Sets are processed in key order, cards in source-file order. Records are
/// normalized one at a time and flushed in `batch_size` transactions; a
/// record failing inside a batch is logged and skipped, a record without a
/// uuid aborts the run before its batch is written.
pub async fn import_document(
    db: &SparkDb,
    document: &AllPrintings,
    batch_size: usize,
) -> Result<ImportSummary, ImportError> {
    let batch_size = batch_size.max(1);
    let mut summary = ImportSummary::default();
    let now = Utc::now();

    for (code, set) in &document.data {
        db.upsert_set(&normalize_set(set, now)).await?;
        summary.sets += 1;

        let mut batch: Vec<Card> = Vec::with_capacity(batch_size);
        for raw in &set.cards {
            let card = normalize_card(raw, set, now)?;
            summary.processed += 1;
            batch.push(card);
            if batch.len() >= batch_size {
                flush_batch(db, &mut batch, &mut summary).await?;
            }
        }
        flush_batch(db, &mut batch, &mut summary).await?;

        tracing::info!(set = %code, cards = set.cards.len(), "set imported");
    }

    let total = db.card_count().await?;
    let description = format!("MTGJSON AllPrintings import ({} sets)", summary.sets);
    db.write_import_meta(total, &description, Utc::now()).await?;

    tracing::info!(
        sets = summary.sets,
        processed = summary.processed,
        updated = summary.updated,
        errors = summary.errors,
        "import complete"
    );
    Ok(summary)
}

async fn flush_batch(
    db: &SparkDb,
    batch: &mut Vec<Card>,
    summary: &mut ImportSummary,
) -> Result<(), ImportError> {
    if batch.is_empty() {
        return Ok(());
    }
    let outcome = db.upsert_cards(batch).await?;
    tracing::debug!(
        written = outcome.written,
        errors = outcome.errors,
        "batch committed"
    );
    summary.updated += outcome.written;
    summary.errors += outcome.errors;
    batch.clear();
    Ok(())
}

/// Parse and upsert the comprehensive-rules text dump.
///
/// Rows whose stored content already matches are counted as `unchanged` and
/// not rewritten; individual write failures are logged and counted, never
/// fatal.
///
/// # Errors
///
/// Returns `ImportError` if the file cannot be read.
pub async fn import_rules(db: &SparkDb, path: &Path) -> Result<RulesImportSummary, ImportError> {
    let text = tokio::fs::read_to_string(path).await?;
    let rules = parse_comprehensive_rules(&text, Utc::now());

    let mut summary = RulesImportSummary::default();
    for rule in &rules {
        summary.processed += 1;
        match db.upsert_rule(rule).await {
            Ok(RuleWriteOutcome::Unchanged) => summary.unchanged += 1,
            Ok(RuleWriteOutcome::Inserted | RuleWriteOutcome::Updated) => summary.updated += 1,
            Err(error) => {
                tracing::warn!(rule = %rule.rule_number, %error, "rule upsert failed; skipping");
                summary.errors += 1;
            }
        }
    }

    tracing::info!(
        processed = summary.processed,
        updated = summary.updated,
        unchanged = summary.unchanged,
        "rules import complete"
    );
    Ok(summary)
}
