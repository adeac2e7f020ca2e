//! `isofetch serve` – static file server for the web directory.

use anyhow::Result;
use isofetch_core::config::FetchConfig;
use isofetch_core::serve::StaticServer;
use std::path::PathBuf;

pub async fn run_serve(cfg: &FetchConfig, port: Option<u16>, root: Option<PathBuf>) -> Result<()> {
    let port = port.unwrap_or(cfg.server.port);
    let root = root.unwrap_or_else(|| cfg.server.root.clone());
    let server = StaticServer::bind(&format!("0.0.0.0:{port}"), &root)?;
    tracing::info!(root = %root.display(), "static server on port {}", port);
    println!("serving at port {port}");
    tokio::task::spawn_blocking(move || server.serve_forever()).await?;
    Ok(())
}
