//! Tracing bootstrap.
//!
//! The interactive dashboard owns the terminal, so its logs go to a file;
//! the print commands log to stderr. Filtering follows `RUST_LOG` and
//! defaults to `info`.

use std::env;
use std::fs::{OpenOptions, create_dir_all};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable used to override the log file path.
pub const LOG_PATH_ENV: &str = "EXTDASH_LOG_PATH";

const LOG_FILE_NAME: &str = "extdash.log";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<cache dir>/extdash/extdash.log`, or the temp dir when no cache dir is known.
pub fn default_log_path() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("extdash")
        .join(LOG_FILE_NAME)
}

/// Honor [`LOG_PATH_ENV`] when set and non-empty.
pub fn resolve_log_path() -> PathBuf {
    env::var(LOG_PATH_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
