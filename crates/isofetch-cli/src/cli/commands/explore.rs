//! `isofetch explore` – find a file in a GitHub repository by name.

use anyhow::Result;
use isofetch_core::config::FetchConfig;
use isofetch_core::explorer::ContentsClient;
use isofetch_core::http::CurlClient;

pub async fn run_explore(
    cfg: &FetchConfig,
    repo: Option<&str>,
    path: &str,
    needle: &str,
) -> Result<()> {
    let repo = repo.unwrap_or(cfg.explorer.repo.as_str()).to_string();
    let mut contents =
        ContentsClient::new(CurlClient::from_config(cfg), &cfg.explorer.api_base, &repo)?;
    let path = path.to_string();
    let needle = needle.to_string();

    println!("Searching for '{needle}' in {repo}...");
    let found = tokio::task::spawn_blocking(move || contents.search(&path, &needle)).await?;
    match found {
        Some(p) => println!("Found: {p}"),
        None => println!("No match."),
    }
    Ok(())
}
