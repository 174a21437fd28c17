//! Subscriber setup for the `thumbkit` binary.
//!
//! Events go to `thumbkit.log` under the XDG state dir, or to stderr when
//! that file cannot be opened. `RUST_LOG` overrides the filter either way.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Normal runs: one line per command, URL construction details at debug.
pub const DEFAULT_FILTER: &str = "info,thumbkit=debug";

/// `--verbose`: everything, including dependencies.
pub const VERBOSE_FILTER: &str = "debug";

/// Picks the filter for a run. `RUST_LOG` still wins when set.
pub fn filter_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// `~/.local/state/thumbkit/thumbkit.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbkit")?;
    Ok(xdg_dirs.place_state_file("thumbkit.log")?)
}

/// Hands each event its own handle on one append-mode file.
struct AppendFile(fs::File);

impl<'a> MakeWriter<'a> for AppendFile {
    type Writer = Box<dyn io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::stderr()),
        }
    }
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Log to [`log_file_path`] and return that path.
///
/// Errors when the file cannot be opened or a subscriber is already set;
/// the caller then falls back to [`init_logging_stderr`].
pub fn init_logging(default_filter: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(AppendFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(filter = default_filter, "thumbkit logging to {}", path.display());
    Ok(path)
}

/// Log to stderr only.
pub fn init_logging_stderr(default_filter: &str) {
    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
