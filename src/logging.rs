//! Subscriber setup for binaries and tests. The library itself only emits
//! `tracing` events; nothing is recorded until a subscriber is installed.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file for the TUI.
pub const LOG_FILE_ENV: &str = "ANTE_RS_LOG";

const DEFAULT_FILTER: &str = "info,ante_rs=debug";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LogInitError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot install subscriber: {0}")]
    Install(String),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn file_subscriber(
    path: &Path,
    filter: EnvFilter,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, LogInitError> {
    let file = File::create(path)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish())
}

/// Send all events to `path`, filtered by `RUST_LOG`.
pub fn init_file_logging(path: &Path) -> Result<(), LogInitError> {
    let subscriber = file_subscriber(path, filter())?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LogInitError::Install(e.to_string()))
}

/// Log to the file named by [`LOG_FILE_ENV`], if set. A terminal UI owns
/// stdout, so without the variable no subscriber is installed.
/// Returns whether logging was enabled.
pub fn init_from_env() -> Result<bool, LogInitError> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => {
            init_file_logging(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Scoped subscriber writing through the test harness. Drop the guard to remove it.
pub fn test_subscriber() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("ante_rs=debug"))
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
