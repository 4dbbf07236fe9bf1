//! Error types for sortviz-terminal.

use sortviz_core::SortvizError;
use thiserror::Error;

/// Errors from the terminal front end.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or data error from the core crate.
    #[error(transparent)]
    Core(#[from] SortvizError),

    /// Terminal not available.
    #[error("Terminal not available")]
    TerminalNotAvailable,
}
