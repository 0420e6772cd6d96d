use std::time::Duration;

use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImportCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    action: &ImportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ImportCommands::Cards {
            path,
            download,
            batch_size,
        } => run_cards(path.as_deref(), *download, *batch_size, ctx, flags).await,
        ImportCommands::Rules { path } => run_rules(path, ctx, flags).await,
    }
}

async fn run_cards(
    path: Option<&str>,
    download: bool,
    batch_size: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let bulk_path = ctx.resolve_path(path.unwrap_or(&ctx.config.mtgjson.bulk_path));

    if download {
        let progress = Progress::spinner("downloading bulk data");
        let result = spark_mtgjson::download::download_all_printings(
            &ctx.config.mtgjson.download_url,
            &bulk_path,
            Duration::from_secs(ctx.config.mtgjson.download_timeout_secs),
            &ctx.config.mtgjson.user_agent,
        )
        .await;
        match &result {
            Ok(bytes) => progress.finish_ok(&format!("downloaded {bytes} bytes")),
            Err(_) => progress.finish_err("download failed"),
        }
        result?;
    }

    let batch_size = batch_size.unwrap_or(ctx.config.general.batch_size).max(1) as usize;
    let progress = Progress::spinner("importing cards");
    let result = spark_mtgjson::import_all_printings(&ctx.db, &bulk_path, batch_size).await;
    match &result {
        Ok(summary) => progress.finish_ok(&format!(
            "imported {} cards from {} sets ({} errors)",
            summary.updated, summary.sets, summary.errors
        )),
        Err(_) => progress.finish_err("import failed"),
    }
    let summary = result?;

    output(&json!({ "import": summary }), flags.format)
}

async fn run_rules(path: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rules_path = ctx.resolve_path(path);

    let progress = Progress::spinner("importing rules");
    let result = spark_mtgjson::import_rules(&ctx.db, &rules_path).await;
    match &result {
        Ok(summary) => progress.finish_ok(&format!(
            "{} rules ({} written, {} unchanged)",
            summary.processed, summary.updated, summary.unchanged
        )),
        Err(_) => progress.finish_err("rules import failed"),
    }
    let summary = result?;

    output(&json!({ "rules": summary }), flags.format)
}
