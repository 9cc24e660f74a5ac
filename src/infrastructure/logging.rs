//! Log output for the menu board.
//!
//! The terminal is owned by the UI, so logs only ever go to a file.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Builds the filter, letting `RUST_LOG` take precedence over the configured directives.
pub fn build_filter(configured: &str) -> Result<EnvFilter, LoggingError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    parse_filter(&select_directives(from_env.as_deref(), configured))
}

/// Picks the environment directives when they are set and non-blank.
fn select_directives(from_env: Option<&str>, configured: &str) -> String {
    from_env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(configured)
        .to_string()
}

fn parse_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
        filter: directives.to_string(),
        source,
    })
}

/// Installs a global subscriber appending plain-text logs to `path`.
pub fn init_file_logging(path: &Path, filter: &str) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })
}
