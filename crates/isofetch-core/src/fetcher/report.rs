//! What a run produced, per category.

use std::path::PathBuf;

/// Outcome for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: String,
    /// Files written, in item order.
    pub saved: Vec<PathBuf>,
    /// Items for which every candidate missed.
    pub missed: Vec<String>,
    /// Items never attempted because the cap was reached.
    pub capped: Vec<String>,
}

/// Outcome for a whole run, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub categories: Vec<CategoryReport>,
}

impl FetchReport {
    pub fn saved_count(&self) -> usize {
        self.categories.iter().map(|c| c.saved.len()).sum()
    }

    pub fn missed_count(&self) -> usize {
        self.categories.iter().map(|c| c.missed.len()).sum()
    }
}

/// Progress notifications emitted while fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchEvent<'a> {
    CategoryStarted { category: &'a str },
    Saved { category: &'a str, filename: &'a str },
}
