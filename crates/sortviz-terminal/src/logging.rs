//! File logging.
//!
//! The animation owns the terminal, so log lines never go to stdout or
//! stderr. Without `--log-file` no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::TuiError;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if it parses, otherwise [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Append plain-text logs to `path` for the rest of the process.
pub fn init_file_logging(path: &Path) -> Result<(), TuiError> {
    let file = open_log(path)?;
    let filter = filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(())
}
