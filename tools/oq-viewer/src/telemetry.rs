//! Logging setup.
//!
//! The TUI owns the terminal, so its logs go to a file; the `ask` command
//! logs to stderr.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default log file of the TUI.
pub const DEFAULT_LOG_FILE: &str = "oq-viewer.log";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `OQ_LOG_FILE`, or `oq-viewer.log` in the working directory.
    pub fn file_from_env() -> Self {
        LogTarget::File(
            env::var("OQ_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE)),
        )
    }
}

/// Log level filter from `OQ_LOG_LEVEL` or `RUST_LOG` (default: info).
pub fn log_level_from_env() -> String {
    log_level_from(|key| env::var(key).ok())
}

fn log_level_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("OQ_LOG_LEVEL")
        .or_else(|| lookup("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

/// Install the global subscriber.
pub fn init(target: &LogTarget) -> Result<()> {
    let level = log_level_from_env();
    let env_filter =
        EnvFilter::try_new(&level).with_context(|| format!("invalid log filter {level:?}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("tracing init failed: {e}"))?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("tracing init failed: {e}"))?;
        }
    }

    tracing::debug!(log_target = ?target, %level, "Logging initialized");
    Ok(())
}
