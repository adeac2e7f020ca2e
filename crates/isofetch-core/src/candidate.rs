//! Candidate enumeration: which remote names to try for an item, and in what order.

use crate::catalog::CategoryKind;
use crate::config::BaseUrls;

/// Suffixes appended to the item name, in attempt order. The last four are
/// the isometric facing directions used by most sprite packs.
const SUFFIXES: [&str; 9] = [
    "", "_small", "_large", "_double", "_long", "_NW", "_NE", "_SE", "_SW",
];

const FLOOR_PREFIX: &str = "floor_";
const EXTENSION: &str = ".png";

/// A speculative (base URL, filename) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub base: &'a str,
    pub filename: String,
}

impl Candidate<'_> {
    pub fn url(&self) -> String {
        format!("{}{}", self.base, self.filename)
    }
}

/// Filenames to try for `item`, in attempt order.
pub fn candidate_filenames(item: &str, kind: CategoryKind) -> Vec<String> {
    let mut names: Vec<String> = SUFFIXES
        .iter()
        .map(|suffix| format!("{item}{suffix}{EXTENSION}"))
        .collect();
    if kind == CategoryKind::Floor && !item.starts_with(FLOOR_PREFIX) {
        names.push(format!("{FLOOR_PREFIX}{item}{EXTENSION}"));
    }
    names
}

/// Base URLs to try for a category kind, in attempt order.
pub fn base_urls(kind: CategoryKind, bases: &BaseUrls) -> Vec<&str> {
    match kind {
        CategoryKind::Vegetation => vec![bases.vegetation.as_str()],
        CategoryKind::Floor => vec![bases.floor.as_str()],
        CategoryKind::Furniture => vec![bases.furniture.as_str(), bases.furniture_kit.as_str()],
    }
}

/// Every candidate for `item`: all filenames against the first base, then the next base.
pub fn candidates<'a>(item: &str, kind: CategoryKind, bases: &'a BaseUrls) -> Vec<Candidate<'a>> {
    let filenames = candidate_filenames(item, kind);
    let filenames = &filenames;
    base_urls(kind, bases)
        .into_iter()
        .flat_map(move |base| {
            filenames.iter().map(move |filename| Candidate {
                base,
                filename: filename.clone(),
            })
        })
        .collect()
}
