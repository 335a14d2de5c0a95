//! Report fetching.
//!
//! The report source is a single fixed resource per load: an `http(s)://`
//! URL, a local file path, or `-` for stdin. There is no retry and no
//! cancellation; any fetch failure aborts the load.

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncReadExt;

/// Fetches the raw report text from the configured source.
///
/// # Errors
///
/// Returns an error on network/DNS/HTTP failure, a non-success HTTP status,
/// or an unreadable file. Body decoding uses default text decoding.
pub async fn fetch_report(client: &reqwest::Client, source: &str) -> Result<String> {
    if source == "-" {
        info!("Reading report from stdin");
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read report from stdin")?;
        return Ok(raw);
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        info!("Fetching report from {}", source);
        let response = client
            .get(source)
            .send()
            .await
            .with_context(|| format!("Failed to fetch report from {}", source))?
            .error_for_status()
            .with_context(|| format!("Report request to {} returned an error status", source))?;
        return response
            .text()
            .await
            .with_context(|| format!("Failed to read report body from {}", source));
    }

    info!("Reading report from {}", source);
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read report file {}", source))
}
