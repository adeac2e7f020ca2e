//! Logging init: file under XDG state dir, or a quieter stderr fallback.
//!
//! Per-candidate misses are logged at debug. They go to the log file only;
//! the stderr fallback stays at info so misses never reach the terminal.

use anyhow::{anyhow, Result};
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output ends up; picks the default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

impl LogTarget {
    /// Filter used when `RUST_LOG` is unset.
    pub fn default_filter(self) -> &'static str {
        match self {
            LogTarget::File => "info,isofetch=debug,isofetch_core=debug",
            LogTarget::Stderr => "info",
        }
    }

    fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

/// Initialize structured logging to `~/.local/state/isofetch/isofetch.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("isofetch")?;
    let log_file_path = xdg_dirs.place_state_file("isofetch.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(LogTarget::File.env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("{}", e))?;

    tracing::info!("isofetch logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging()` fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(LogTarget::Stderr.env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
