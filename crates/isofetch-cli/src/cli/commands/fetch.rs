//! `isofetch fetch` – download sprites for the catalog.

use anyhow::Result;
use isofetch_core::config::FetchConfig;
use isofetch_core::fetcher::{AssetFetcher, FetchEvent};
use isofetch_core::http::CurlClient;
use std::path::PathBuf;

pub async fn run_fetch(
    cfg: &FetchConfig,
    categories: &[String],
    asset_root: Option<PathBuf>,
) -> Result<()> {
    let mut catalog = cfg.catalog();
    if !categories.is_empty() {
        catalog = catalog.restrict_to(categories)?;
    }

    let mut fetcher = AssetFetcher::new(CurlClient::from_config(cfg), cfg);
    if let Some(root) = asset_root {
        fetcher = fetcher.with_asset_root(root);
    }

    // Requests are strictly sequential; keep the whole loop off the async workers.
    let report = tokio::task::spawn_blocking(move || {
        println!("Starting isometric asset download...");
        fetcher.fetch_all(&catalog, &mut |ev| match ev {
            FetchEvent::CategoryStarted { category } => {
                println!("\nProcessing category: {category}")
            }
            FetchEvent::Saved { filename, .. } => println!("  [OK] {filename}"),
        })
    })
    .await??;

    println!("\nDownload finished.");
    tracing::info!(
        saved = report.saved_count(),
        missed = report.missed_count(),
        "fetch completed"
    );
    Ok(())
}
