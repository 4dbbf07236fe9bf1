//! YAML configuration.
//!
//! Search order: an explicit path, then `$XDG_CONFIG_HOME/sortviz/config.yaml`,
//! then `~/.config/sortviz/config.yaml`. Missing files fall back to defaults;
//! every field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SortvizError;
use crate::generator::{SequenceGenerator, DEFAULT_HIGH, DEFAULT_LEN, DEFAULT_LOW};
use crate::sort::Algorithm;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceConfig {
    /// Number of bars.
    pub len: usize,
    /// Smallest value (inclusive).
    pub min: i32,
    /// Largest value (inclusive).
    pub max: i32,
    /// Fixed seed; unset means `RANDOM_SEED` or entropy.
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            min: DEFAULT_LOW,
            max: DEFAULT_HIGH,
            seed: None,
        }
    }
}

/// Per-algorithm pause after each step, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DelayConfig {
    pub bubble: u64,
    pub selection: u64,
    pub insertion: u64,
    pub quick: u64,
    pub merge: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        let ms = |a: Algorithm| a.default_delay().as_millis() as u64;
        Self {
            bubble: ms(Algorithm::Bubble),
            selection: ms(Algorithm::Selection),
            insertion: ms(Algorithm::Insertion),
            quick: ms(Algorithm::Quick),
            merge: ms(Algorithm::Merge),
        }
    }
}

impl DelayConfig {
    /// Same delay for every algorithm.
    #[must_use]
    pub const fn uniform(ms: u64) -> Self {
        Self {
            bubble: ms,
            selection: ms,
            insertion: ms,
            quick: ms,
            merge: ms,
        }
    }

    /// Delay for `algorithm`.
    #[must_use]
    pub const fn for_algorithm(&self, algorithm: Algorithm) -> Duration {
        Duration::from_millis(match algorithm {
            Algorithm::Bubble => self.bubble,
            Algorithm::Selection => self.selection,
            Algorithm::Insertion => self.insertion,
            Algorithm::Quick => self.quick,
            Algorithm::Merge => self.merge,
        })
    }
}

/// Bar colors as hex strings (`#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Bars that are not part of the current step.
    pub bar: String,
    /// First highlighted position.
    pub highlight_a: String,
    /// Second highlighted position.
    pub highlight_b: String,
    /// Status line and menu text.
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bar: "#5f87af".into(),
            highlight_a: "#d75f5f".into(),
            highlight_b: "#87d75f".into(),
            text: "#d0d0d0".into(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortvizConfig {
    pub sequence: SequenceConfig,
    pub delays: DelayConfig,
    pub theme: ThemeConfig,
}

impl SortvizConfig {
    /// XDG-style locations searched when no path is given.
    pub fn config_paths() -> Vec<PathBuf> {
        Self::config_paths_from(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    /// Testable core of [`SortvizConfig::config_paths`].
    #[must_use]
    pub fn config_paths_from(xdg_config: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(xdg) = xdg_config {
            paths.push(xdg.join("sortviz/config.yaml"));
        }
        if let Some(home) = home {
            paths.push(home.join(".config/sortviz/config.yaml"));
        }
        paths
    }

    /// Load from `explicit` if given, otherwise from the first existing
    /// search path, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SortvizError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        for path in Self::config_paths() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, SortvizError> {
        let contents = fs::read_to_string(path).map_err(|source| SortvizError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, SortvizError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(contents)?;
        config.generator()?;
        Ok(config)
    }

    /// Default configuration as a commented YAML document.
    pub fn default_yaml() -> Result<String, SortvizError> {
        let body = serde_yaml_ng::to_string(&Self::default())?;
        Ok(format!(
            "# sortviz configuration\n# Location: ~/.config/sortviz/config.yaml\n# Delays are milliseconds per animation step.\n\n{body}"
        ))
    }

    /// Generator described by the `sequence` section.
    pub fn generator(&self) -> Result<SequenceGenerator<i32>, SortvizError> {
        SequenceGenerator::new(self.sequence.len, self.sequence.min, self.sequence.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let config = SortvizConfig::default();
        assert_eq!(config.sequence.len, 100);
        assert_eq!(config.sequence.min, 1);
        assert_eq!(config.sequence.max, 99);
        assert_eq!(
            config.delays.for_algorithm(Algorithm::Selection),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SortvizConfig::from_yaml("sequence:\n  len: 20\n").unwrap();
        assert_eq!(config.sequence.len, 20);
        assert_eq!(config.sequence.max, 99);
        assert_eq!(config.delays, DelayConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            SortvizConfig::from_yaml("  \n").unwrap(),
            SortvizConfig::default()
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SortvizConfig::from_yaml("sequence:\n  length: 20\n").unwrap_err();
        assert!(matches!(err, SortvizError::ConfigParse(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = SortvizConfig::from_yaml("sequence:\n  min: 50\n  max: 10\n").unwrap_err();
        assert!(matches!(err, SortvizError::InvalidRange { .. }));
    }

    #[test]
    fn test_default_yaml_parses_back() {
        let yaml = SortvizConfig::default_yaml().unwrap();
        assert!(yaml.starts_with("# sortviz configuration"));
        assert_eq!(
            SortvizConfig::from_yaml(&yaml).unwrap(),
            SortvizConfig::default()
        );
    }

    #[test]
    fn test_uniform_delay() {
        let delays = DelayConfig::uniform(0);
        for algorithm in Algorithm::ALL {
            assert_eq!(delays.for_algorithm(algorithm), Duration::ZERO);
        }
    }

    #[test]
    fn test_config_paths_order() {
        let paths = SortvizConfig::config_paths_from(
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/xdg/sortviz/config.yaml"),
                PathBuf::from("/home/user/.config/sortviz/config.yaml"),
            ]
        );
        assert!(SortvizConfig::config_paths_from(None, None).is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err =
            SortvizConfig::load(Some(Path::new("/definitely/not/here/sortviz.yaml"))).unwrap_err();
        assert!(matches!(err, SortvizError::ConfigIo { .. }));
    }
}
