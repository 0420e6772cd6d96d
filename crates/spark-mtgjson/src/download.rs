//! One-time bulk-file download.

use std::path::Path;
use std::time::Duration;

use crate::error::ImportError;

/// Fetch the AllPrintings document to `dest`, bounded by `timeout`.
///
/// # Errors
///
/// Any failure — connection, non-success status, timeout, disk write — is
/// fatal for the download; the caller decides whether to fall back to an
/// existing local copy.
pub async fn download_all_printings(
    url: &str,
    dest: &Path,
    timeout: Duration,
    user_agent: &str,
) -> Result<u64, ImportError> {
    tracing::info!(%url, dest = %dest.display(), "downloading bulk data");

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(dest, &bytes).await?;

    tracing::info!(bytes = bytes.len(), "bulk data written");
    Ok(bytes.len() as u64)
}
