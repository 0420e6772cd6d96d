use std::time::Duration;

use serde_json::json;
use spark_rarity::{BulkIndex, RarityCache, RemoteClient};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BackfillCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    action: &BackfillCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BackfillCommands::Rarity { bulk, offline } => {
            run_rarity(bulk.as_deref(), *offline, ctx, flags).await
        }
    }
}

async fn run_rarity(
    bulk: Option<&str>,
    offline: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let bulk_path = ctx.resolve_path(bulk.unwrap_or(&ctx.config.mtgjson.bulk_path));

    let bulk_index = if bulk_path.exists() {
        let progress = Progress::spinner("indexing bulk data");
        let index = BulkIndex::load(&bulk_path).await;
        match &index {
            Ok(_) => progress.finish_ok("bulk data indexed"),
            Err(_) => progress.finish_err("bulk indexing failed"),
        }
        Some(index?)
    } else {
        tracing::warn!(path = %bulk_path.display(),
            "bulk reference data unavailable; falling back to remote lookups");
        None
    };

    // The remote step is only reachable without bulk data.
    let remote = if bulk_index.is_none() && !offline {
        Some(RemoteClient::new(
            &ctx.config.scryfall.endpoint,
            Duration::from_secs(ctx.config.scryfall.timeout_secs),
            &ctx.config.scryfall.user_agent,
        )?)
    } else {
        None
    };

    let mut cache = RarityCache::load(ctx.spark_dir().join("rarity_cache.json"))?;

    let progress = Progress::spinner("backfilling rarities");
    let result =
        spark_rarity::backfill_rarities(&ctx.db, &mut cache, bulk_index.as_ref(), remote.as_ref())
            .await;
    match &result {
        Ok(summary) => progress.finish_ok(&format!(
            "{} processed, {} updated, {} errors",
            summary.processed, summary.updated, summary.errors
        )),
        Err(_) => progress.finish_err("backfill failed"),
    }
    let summary = result?;

    output(&json!({ "backfill": summary }), flags.format)
}
