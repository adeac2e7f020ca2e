//! CLI for isofetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use isofetch_core::config;
use std::path::PathBuf;

use commands::{run_candidates, run_explore, run_fetch, run_serve};

/// Top-level CLI. With no subcommand, runs `fetch`.
#[derive(Debug, Parser)]
#[command(name = "isofetch")]
#[command(about = "isofetch: isometric sprite fetcher and helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe candidate URLs for every catalog item and save the first hit.
    Fetch {
        /// Only fetch this category (repeatable).
        #[arg(long = "category", value_name = "NAME")]
        categories: Vec<String>,
        /// Override the configured asset root directory.
        #[arg(long, value_name = "DIR")]
        asset_root: Option<PathBuf>,
    },

    /// Print the URLs that would be tried for an item, in order. No network.
    Candidates {
        /// Category name from the catalog.
        category: String,
        /// Item name.
        item: String,
    },

    /// Search a GitHub repository's contents for a file name.
    Explore {
        /// Case-insensitive substring to look for.
        #[arg(default_value = "isometric")]
        needle: String,
        /// Repository as owner/name (default from config).
        #[arg(long)]
        repo: Option<String>,
        /// Directory to start from.
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Serve a local directory over HTTP.
    Serve {
        /// Port to listen on (default from config).
        #[arg(long)]
        port: Option<u16>,
        /// Directory to serve (default from config).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Fetch {
            categories: Vec::new(),
            asset_root: None,
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_default() {
            CliCommand::Fetch {
                categories,
                asset_root,
            } => run_fetch(&cfg, &categories, asset_root).await?,
            CliCommand::Candidates { category, item } => run_candidates(&cfg, &category, &item)?,
            CliCommand::Explore { needle, repo, path } => {
                run_explore(&cfg, repo.as_deref(), &path, &needle).await?
            }
            CliCommand::Serve { port, root } => run_serve(&cfg, port, root).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
