//! Command line for the `sortviz` binary.

use std::path::PathBuf;

use clap::Parser;
use sortviz_core::{DelayConfig, Selection, SortvizConfig, SortvizError};

use crate::color::ColorMode;

/// Animated sorting algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "sortviz", version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (YAML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Number of values to sort
    #[arg(short = 'n', long, value_name = "N")]
    pub len: Option<usize>,

    /// Smallest generated value
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest generated value
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Seed for reproducible data (falls back to RANDOM_SEED)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pause after every step, in milliseconds, for all algorithms
    #[arg(short, long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Run one menu option (1-10) and exit instead of showing the menu
    #[arg(short, long, value_name = "OPTION")]
    pub run: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Append logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut SortvizConfig) {
        if let Some(len) = self.len {
            config.sequence.len = len;
        }
        if let Some(min) = self.min {
            config.sequence.min = min;
        }
        if let Some(max) = self.max {
            config.sequence.max = max;
        }
        if self.seed.is_some() {
            config.sequence.seed = self.seed;
        }
        if let Some(ms) = self.delay_ms {
            config.delays = DelayConfig::uniform(ms);
        }
    }

    /// The `--run` option, parsed like menu input.
    pub fn selection(&self) -> Result<Option<Selection>, SortvizError> {
        self.run.as_deref().map(str::parse::<Selection>).transpose()
    }

    /// `--no-color` wins over detection.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Mono
        } else {
            ColorMode::detect()
        }
    }
}
