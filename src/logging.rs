//! Diagnostic logging via `tracing`.
//!
//! The terminal belongs to the TUI, so events go to
//! `$XDG_DATA_HOME/planner/planner.log`. The `PLANNER_LOG` variable takes
//! `EnvFilter` directives and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const ENV_FILTER: &str = "PLANNER_LOG";
const DEFAULT_FILTER: &str = "info";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory or file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Builds the event filter from a raw directive string, falling back to `info`.
fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Returns the log file path, creating its directory.
fn log_path() -> Result<PathBuf, LoggingError> {
    let dir = dirs::data_dir()
        .ok_or(LoggingError::NoDataDir)?
        .join("planner");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("planner.log"))
}

/// Installs the global subscriber. Returns the path being written to.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<PathBuf, LoggingError> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let raw = std::env::var(ENV_FILTER).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter_from(raw.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(path)
}
