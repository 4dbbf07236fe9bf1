//! RGBA colors for bar themes.

use crate::error::SortvizError;

/// RGBA color with components in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Fully transparent; terminals render it as their default color.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(value: &str) -> Result<Self, SortvizError> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(SortvizError::InvalidColor {
                value: value.to_string(),
                reason: "expected 6 or 8 hex digits",
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| SortvizError::InvalidColor {
                    value: value.to_string(),
                    reason: "not a hex number",
                })
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if hex.len() == 8 { channel(6..8)? } else { 255 };

        Ok(Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        ))
    }

    /// 8-bit channels, rounded.
    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
