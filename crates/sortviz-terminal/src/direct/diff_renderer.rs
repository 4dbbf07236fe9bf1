//! Differential renderer.
//!
//! Writes only dirty cells, skips cursor moves when the cursor is already in
//! place, and re-emits style escapes only when the style changes. The whole
//! frame goes out in one buffered write.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{queue, QueueableCommand};

use super::cell_buffer::{CellBuffer, Modifiers, Style};
use crate::color::ColorMode;

/// Counters from the most recent flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub cells_written: usize,
    pub cursor_moves: usize,
    pub style_changes: usize,
}

/// Renderer that remembers cursor and style between cells.
#[derive(Debug)]
pub struct DiffRenderer {
    color_mode: ColorMode,
    /// Last known cursor position (`None` = unknown).
    cursor: Option<(u16, u16)>,
    /// Style the terminal is currently in (`None` = unknown).
    last_style: Option<Style>,
    stats: FlushStats,
}

impl DiffRenderer {
    /// Create a renderer for the given color mode.
    #[must_use]
    pub const fn new(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            cursor: None,
            last_style: None,
            stats: FlushStats {
                cells_written: 0,
                cursor_moves: 0,
                style_changes: 0,
            },
        }
    }

    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Forget cursor and style state (after a resize or a screen clear).
    pub fn reset(&mut self) {
        self.cursor = None;
        self.last_style = None;
    }

    /// Counters from the last flush.
    #[must_use]
    pub const fn stats(&self) -> FlushStats {
        self.stats
    }

    /// Write every dirty cell of `buffer` to `writer` and clear the dirty
    /// set. Returns the number of cells written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn flush<W: Write>(&mut self, buffer: &mut CellBuffer, writer: &mut W) -> io::Result<usize> {
        self.stats = FlushStats::default();
        if buffer.dirty_count() == 0 {
            return Ok(0);
        }

        let mut out = BufWriter::with_capacity(8192, writer);
        let width = buffer.width();

        for idx in buffer.iter_dirty() {
            let (x, y) = buffer.coords(idx);
            let cell = &buffer.cells()[idx];

            if self.cursor != Some((x, y)) {
                queue!(out, MoveTo(x, y))?;
                self.stats.cursor_moves += 1;
            }

            if self.last_style != Some(cell.style) {
                self.apply_style(&mut out, cell.style)?;
                self.last_style = Some(cell.style);
                self.stats.style_changes += 1;
            }

            queue!(out, Print(cell.symbol.as_str()))?;
            self.stats.cells_written += 1;

            let next_x = x.saturating_add(u16::from(cell.width()));
            self.cursor = (next_x < width).then_some((next_x, y));
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.last_style = None;
        out.flush()?;
        drop(out);

        buffer.clear_dirty();
        Ok(self.stats.cells_written)
    }

    fn apply_style<W: Write>(&self, writer: &mut W, style: Style) -> io::Result<()> {
        // Attribute reset also drops colors, so it must come first.
        writer.queue(SetAttribute(Attribute::Reset))?;
        writer.queue(SetForegroundColor(self.color_mode.to_crossterm(style.fg)))?;
        writer.queue(SetBackgroundColor(self.color_mode.to_crossterm(style.bg)))?;

        let attributes = [
            (Modifiers::BOLD, Attribute::Bold),
            (Modifiers::DIM, Attribute::Dim),
            (Modifiers::UNDERLINE, Attribute::Underlined),
            (Modifiers::REVERSE, Attribute::Reverse),
        ];
        for (modifier, attribute) in attributes {
            if style.modifiers.contains(modifier) {
                writer.queue(SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}
