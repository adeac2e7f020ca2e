//! `isofetch candidates` – dry run of the candidate order for one item.

use anyhow::{Context, Result};
use isofetch_core::candidate;
use isofetch_core::config::FetchConfig;

pub fn run_candidates(cfg: &FetchConfig, category: &str, item: &str) -> Result<()> {
    let catalog = cfg.catalog();
    let cat = catalog
        .get(category)
        .with_context(|| format!("unknown category: {category}"))?;
    for cand in candidate::candidates(item, cat.kind, &cfg.bases) {
        println!("{}", cand.url());
    }
    Ok(())
}
