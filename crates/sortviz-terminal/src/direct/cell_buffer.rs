//! Cell buffer with change-aware dirty tracking.
//!
//! Uses `CompactString` to inline the one- or two-character symbols a bar
//! chart is made of, so steady-state frames don't allocate. A cell is only
//! marked dirty when its content actually changes, which is what lets a
//! full redraw per animation step cost only the bars that moved.

use bitvec::prelude::*;
use compact_str::CompactString;
use sortviz_core::Color;
use unicode_width::UnicodeWidthStr;

/// Text modifiers for terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers(u8);

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self(0);
    /// Bold text.
    pub const BOLD: Self = Self(1 << 0);
    /// Dim/faint text.
    pub const DIM: Self = Self(1 << 1);
    /// Underlined text.
    pub const UNDERLINE: Self = Self(1 << 2);
    /// Reversed colors.
    pub const REVERSE: Self = Self(1 << 3);

    /// Check if no modifier is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific modifier is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Add a modifier.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Colors and modifiers applied to a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub modifiers: Modifiers,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::WHITE,
            bg: Color::TRANSPARENT,
            modifiers: Modifiers::NONE,
        }
    }
}

impl Style {
    /// Foreground color on the terminal's default background.
    #[must_use]
    pub fn fg(fg: Color) -> Self {
        Self {
            fg,
            ..Self::default()
        }
    }

    /// Add modifiers.
    #[must_use]
    pub const fn with(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.with(modifiers);
        self
    }
}

/// A single terminal cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The symbol displayed in this cell.
    pub symbol: CompactString,
    /// Colors and modifiers.
    pub style: Style,
    /// Display width of the symbol.
    width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            style: Style::default(),
            width: 1,
        }
    }
}

impl Cell {
    /// Create a new cell with the given content.
    #[must_use]
    pub fn new(symbol: &str, style: Style) -> Self {
        Self {
            symbol: CompactString::new(symbol),
            style,
            width: Self::measure(symbol),
        }
    }

    /// Display width of the symbol.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Replace the content. Returns whether anything changed.
    pub fn update(&mut self, symbol: &str, style: Style) -> bool {
        if self.symbol == symbol && self.style == style {
            return false;
        }
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self.style = style;
        self.width = Self::measure(symbol);
        true
    }

    fn measure(symbol: &str) -> u8 {
        UnicodeWidthStr::width(symbol).clamp(1, 255) as u8
    }
}

/// Buffer of terminal cells with dirty tracking.
#[derive(Debug)]
pub struct CellBuffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
    /// Dirty bit per cell.
    dirty: BitVec,
}

impl CellBuffer {
    /// Create a new buffer with the given dimensions. Every cell starts
    /// dirty so the first flush paints the whole screen.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
            dirty: bitvec![1; size],
        }
    }

    /// Buffer width.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) to linear index.
    #[must_use]
    pub fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// Convert linear index to (x, y).
    #[must_use]
    pub fn coords(&self, idx: usize) -> (u16, u16) {
        let width = usize::from(self.width.max(1));
        ((idx % width) as u16, (idx / width) as u16)
    }

    /// Get a cell reference.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Update a cell, marking it dirty only if its content changed.
    /// Out-of-bounds coordinates are ignored.
    pub fn update(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            if self.cells[idx].update(symbol, style) {
                self.dirty.set(idx, true);
            }
        }
    }

    /// Reset every cell to a blank default. Only cells that weren't already
    /// blank become dirty.
    pub fn clear(&mut self) {
        let blank = Style::default();
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if cell.update(" ", blank) {
                self.dirty.set(idx, true);
            }
        }
    }

    /// Write a string starting at (x, y), clipped at the right edge.
    /// Returns the column after the last written cell.
    pub fn write_str(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut cx = x;
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.update(cx, y, ch.encode_utf8(&mut buf), style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Clear dirty flags.
    pub fn clear_dirty(&mut self) {
        self.dirty.fill(false);
    }

    /// Count dirty cells.
    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.dirty.count_ones()
    }

    /// Iterate over dirty cell indices.
    pub fn iter_dirty(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.iter_ones()
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resize the buffer (clears all content and marks everything dirty).
    pub fn resize(&mut self, width: u16, height: u16) {
        let size = usize::from(width) * usize::from(height);
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(size, Cell::default());
        self.dirty = bitvec![1; size];
    }

    /// Text of row `y`, for assertions and plain-text dumps.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        self.cells[start..start + usize::from(self.width)]
            .iter()
            .map(|c| c.symbol.as_str())
            .collect()
    }
}
