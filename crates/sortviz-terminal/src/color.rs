//! Terminal color capability detection and conversion.

use crossterm::style::Color as CrosstermColor;
use sortviz_core::Color;

/// Terminal color capability mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit true color (COLORTERM=truecolor or 24bit).
    #[default]
    TrueColor,
    /// 256 color palette.
    Color256,
    /// 16 ANSI colors.
    Color16,
    /// Monochrome (no color).
    Mono,
}

impl ColorMode {
    /// Detect from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with_env(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    /// Testable core of [`ColorMode::detect`].
    #[must_use]
    pub fn detect_with_env(no_color: bool, colorterm: Option<&str>, term: Option<&str>) -> Self {
        if no_color {
            return Self::Mono;
        }
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }
        match term {
            Some(t) if t.contains("256color") => Self::Color256,
            Some("dumb") | None => Self::Mono,
            _ => Self::Color16,
        }
    }

    /// Whether colors carry any information in this mode.
    #[must_use]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::Mono)
    }

    /// Convert to a crossterm color. Transparent maps to `Reset` so the
    /// terminal's own default shows through instead of black.
    #[must_use]
    pub fn to_crossterm(self, color: Color) -> CrosstermColor {
        if color.is_transparent() {
            return CrosstermColor::Reset;
        }

        let (r, g, b) = color.to_rgb8();
        match self {
            Self::TrueColor => CrosstermColor::Rgb { r, g, b },
            Self::Color256 => CrosstermColor::AnsiValue(rgb_to_256(r, g, b)),
            Self::Color16 => rgb_to_16(r, g, b),
            Self::Mono => CrosstermColor::Reset,
        }
    }
}

/// Nearest entry of the xterm 256-color palette.
fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        // Grayscale ramp 232-255.
        return 232 + ((r - 8) / 10).min(23);
    }

    // 6x6x6 cube 16-231.
    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Nearest of the 16 ANSI colors, split into dark and bright by luminance.
fn rgb_to_16(r: u8, g: u8, b: u8) -> CrosstermColor {
    let luminance = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    let bright = luminance > 127;

    let threshold = r.max(g).max(b) / 2;
    let hue = (r > threshold, g > threshold, b > threshold);

    let (dark, light) = match hue {
        (false, false, false) => (CrosstermColor::Black, CrosstermColor::DarkGrey),
        (true, false, false) => (CrosstermColor::DarkRed, CrosstermColor::Red),
        (false, true, false) => (CrosstermColor::DarkGreen, CrosstermColor::Green),
        (true, true, false) => (CrosstermColor::DarkYellow, CrosstermColor::Yellow),
        (false, false, true) => (CrosstermColor::DarkBlue, CrosstermColor::Blue),
        (true, false, true) => (CrosstermColor::DarkMagenta, CrosstermColor::Magenta),
        (false, true, true) => (CrosstermColor::DarkCyan, CrosstermColor::Cyan),
        (true, true, true) => (CrosstermColor::Grey, CrosstermColor::White),
    };
    if bright {
        light
    } else {
        dark
    }
}
