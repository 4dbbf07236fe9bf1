//! Resolved bar colors.

use sortviz_core::{Color, SortvizError, ThemeConfig};

/// Colors used for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bar: Color,
    pub highlight_a: Color,
    pub highlight_b: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar: Color::from_rgb8(0x5f, 0x87, 0xaf),
            highlight_a: Color::from_rgb8(0xd7, 0x5f, 0x5f),
            highlight_b: Color::from_rgb8(0x87, 0xd7, 0x5f),
            text: Color::from_rgb8(0xd0, 0xd0, 0xd0),
        }
    }
}

impl Theme {
    /// Parse the hex strings of a theme section.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, SortvizError> {
        Ok(Self {
            bar: Color::from_hex(&config.bar)?,
            highlight_a: Color::from_hex(&config.highlight_a)?,
            highlight_b: Color::from_hex(&config.highlight_b)?,
            text: Color::from_hex(&config.text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_default_config() {
        assert_eq!(
            Theme::from_config(&ThemeConfig::default()).unwrap(),
            Theme::default()
        );
    }

    #[test]
    fn test_bad_hex_rejected() {
        let config = ThemeConfig {
            bar: "blue".into(),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            Theme::from_config(&config),
            Err(SortvizError::InvalidColor { .. })
        ));
    }
}
