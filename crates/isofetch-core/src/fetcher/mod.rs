//! Sprite fetch loop.
//!
//! For each category, for each item: walk the candidates in order, take the
//! first HTTP 200, write it, move on. Misses of any kind are logged at debug
//! and skipped; only filesystem errors propagate.

mod report;

pub use report::{CategoryReport, FetchEvent, FetchReport};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::candidate;
use crate::catalog::{Catalog, Category};
use crate::config::{BaseUrls, FetchConfig};
use crate::http::HttpGet;
use crate::storage;

pub struct AssetFetcher<C> {
    client: C,
    bases: BaseUrls,
    asset_root: PathBuf,
    cap: usize,
    delay: Duration,
}

impl<C: HttpGet> AssetFetcher<C> {
    pub fn new(client: C, cfg: &FetchConfig) -> Self {
        Self {
            client,
            bases: cfg.bases.clone(),
            asset_root: cfg.asset_root.clone(),
            cap: cfg.per_category_cap,
            delay: cfg.request_delay(),
        }
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// Runs every category in catalog order. The catalog is validated first
    /// so no name can resolve outside the asset root.
    pub fn fetch_all(
        &mut self,
        catalog: &Catalog,
        on_event: &mut dyn FnMut(FetchEvent<'_>),
    ) -> Result<FetchReport> {
        catalog.validate()?;
        let mut report = FetchReport::default();
        for category in catalog.categories() {
            report
                .categories
                .push(self.fetch_category(category, on_event)?);
        }
        Ok(report)
    }

    pub fn fetch_category(
        &mut self,
        category: &Category,
        on_event: &mut dyn FnMut(FetchEvent<'_>),
    ) -> Result<CategoryReport> {
        category.validate()?;
        on_event(FetchEvent::CategoryStarted {
            category: &category.name,
        });
        let dir = storage::ensure_category_dir(&self.asset_root, &category.name)?;

        let mut report = CategoryReport {
            name: category.name.clone(),
            ..Default::default()
        };
        for item in &category.items {
            if report.saved.len() >= self.cap {
                report.capped.push(item.clone());
                continue;
            }
            match self.fetch_item(&dir, category, item)? {
                Some((filename, path)) => {
                    on_event(FetchEvent::Saved {
                        category: &category.name,
                        filename: &filename,
                    });
                    report.saved.push(path);
                }
                None => {
                    tracing::debug!(category = %category.name, item = %item, "no candidate resolved");
                    report.missed.push(item.clone());
                }
            }
        }

        if !report.capped.is_empty() {
            tracing::info!(
                category = %category.name,
                skipped = report.capped.len(),
                "category cap of {} reached",
                self.cap
            );
        }
        Ok(report)
    }

    /// Tries candidates until one answers 200. Returns the saved filename and path.
    fn fetch_item(
        &mut self,
        dir: &Path,
        category: &Category,
        item: &str,
    ) -> Result<Option<(String, PathBuf)>> {
        for cand in candidate::candidates(item, category.kind, &self.bases) {
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
            let url = cand.url();
            match self.client.get(&url) {
                Ok(body) => {
                    let path = storage::write_asset(dir, &cand.filename, &body)?;
                    tracing::info!(url = %url, bytes = body.len(), "saved {}", path.display());
                    return Ok(Some((cand.filename, path)));
                }
                Err(e) if e.is_not_found() => tracing::debug!(url = %url, "not found"),
                Err(e) => tracing::debug!(url = %url, "miss: {}", e),
            }
        }
        Ok(None)
    }
}
