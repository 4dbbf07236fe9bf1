//! Error types for sortviz-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or driving a sort demo.
#[derive(Debug, Error)]
pub enum SortvizError {
    /// Generator bounds are inverted.
    #[error("Invalid range: low ({low}) is greater than high ({high})")]
    InvalidRange { low: String, high: String },

    /// Menu input that does not name an option.
    #[error("Invalid option: {0:?}")]
    InvalidOption(String),

    /// Config file could not be read.
    #[error("Config IO error for {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`crate::SortvizConfig`].
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// Theme color is not a hex string.
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: &'static str },
}

impl SortvizError {
    /// Build an [`SortvizError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range(low: impl std::fmt::Display, high: impl std::fmt::Display) -> Self {
        Self::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}
