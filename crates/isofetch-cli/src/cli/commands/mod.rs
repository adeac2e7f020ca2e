//! CLI command handlers, one per file.

mod candidates;
mod explore;
mod fetch;
mod serve;

pub use candidates::run_candidates;
pub use explore::run_explore;
pub use fetch::run_fetch;
pub use serve::run_serve;
