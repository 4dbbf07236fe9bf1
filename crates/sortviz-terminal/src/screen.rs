//! Frame layout: the animation frame and the menu screen.
//!
//! ```text
//! row 0      status line
//! rows 1..   bars                      (animation)
//!
//! row 0      header
//! rows 2-12  numbered options
//! row 14     last run
//! row 15     message
//! row 16     prompt
//! rows 18..  bars of the current data  (menu)
//! ```

use sortviz_core::{RunSpec, Selection, SortStats, Step};
use tracing::trace;

use crate::bars::{Area, BarChart};
use crate::color::ColorMode;
use crate::direct::{CellBuffer, DiffRenderer, FlushStats, Modifiers, Style};
use crate::error::TuiError;
use crate::terminal::TerminalBackend;
use crate::theme::Theme;

const OPTIONS_TOP: u16 = 2;
const LAST_RUN_ROW: u16 = 14;
const MESSAGE_ROW: u16 = 15;
const PROMPT_ROW: u16 = 16;
const MENU_BARS_TOP: u16 = 18;

/// Everything the menu screen shows.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub header: &'a str,
    pub data: &'a [i32],
    pub input: &'a str,
    pub message: Option<&'a str>,
    pub last_run: Option<(RunSpec, SortStats)>,
}

/// Off-screen frame plus the renderer that pushes it out.
#[derive(Debug)]
pub struct Screen {
    buffer: CellBuffer,
    renderer: DiffRenderer,
    theme: Theme,
}

impl Screen {
    #[must_use]
    pub fn new(width: u16, height: u16, color_mode: ColorMode, theme: Theme) -> Self {
        Self {
            buffer: CellBuffer::new(width, height),
            renderer: DiffRenderer::new(color_mode),
            theme,
        }
    }

    /// The frame as last painted.
    #[must_use]
    pub const fn buffer(&self) -> &CellBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    const fn mono(&self) -> bool {
        !self.renderer.color_mode().has_color()
    }

    fn text_style(&self) -> Style {
        Style::fg(self.theme.text)
    }

    /// Follow the terminal's size. Returns whether it changed.
    pub fn sync_size<B: TerminalBackend>(&mut self, backend: &B) -> Result<bool, TuiError> {
        let (width, height) = backend.size()?;
        if width == self.buffer.width() && height == self.buffer.height() {
            return Ok(false);
        }
        self.buffer.resize(width, height);
        self.renderer.reset();
        Ok(true)
    }

    /// Push changed cells to the terminal.
    pub fn present<B: TerminalBackend>(
        &mut self,
        backend: &mut B,
    ) -> Result<FlushStats, TuiError> {
        backend.write_flush(&mut self.buffer, &mut self.renderer)?;
        let stats = self.renderer.stats();
        trace!(
            cells = stats.cells_written,
            moves = stats.cursor_moves,
            styles = stats.style_changes,
            "frame flushed"
        );
        Ok(stats)
    }

    /// Write `text` on row `y`, blanking the rest of the row.
    fn line(&mut self, y: u16, text: &str, style: Style) {
        let end = self.buffer.write_str(0, y, text, style);
        for x in end..self.buffer.width() {
            self.buffer.update(x, y, " ", Style::default());
        }
    }

    /// Paint one animation frame. Every cell is written, so unchanged cells
    /// stay clean in the buffer.
    pub fn paint_step(&mut self, spec: RunSpec, step: Step<'_, i32>, steps: usize) {
        let status = format!(" {spec}  step {steps}  [q] stop");
        self.line(0, &status, self.text_style().with(Modifiers::BOLD));

        let area = Area::new(
            0,
            1,
            self.buffer.width(),
            self.buffer.height().saturating_sub(1),
        );
        let mono = self.mono();
        BarChart::from_step(step).paint(&mut self.buffer, area, &self.theme, mono);
    }

    /// Paint the menu.
    pub fn paint_menu(&mut self, view: &MenuView<'_>) {
        self.buffer.clear();
        let text = self.text_style();

        self.line(0, view.header, text.with(Modifiers::BOLD));

        for (row, selection) in (OPTIONS_TOP..).zip(Selection::all()) {
            let entry = format!(" {:>2}  {}", selection.option(), selection.label());
            self.line(row, &entry, text);
        }

        if let Some((spec, stats)) = view.last_run {
            let outcome = if stats.completed { "" } else { ", stopped" };
            let summary = format!(
                " Last: {spec}, {} steps, {} swaps{outcome}",
                stats.steps, stats.swaps
            );
            self.line(LAST_RUN_ROW, &summary, text.with(Modifiers::DIM));
        }

        if let Some(message) = view.message {
            let warn = Style::fg(self.theme.highlight_a).with(Modifiers::BOLD);
            self.line(MESSAGE_ROW, &format!(" {message}"), warn);
        }

        let prompt = format!(" Select an option: {}_", view.input);
        self.line(PROMPT_ROW, &prompt, text);

        let height = self.buffer.height();
        if height > MENU_BARS_TOP {
            let area = Area::new(0, MENU_BARS_TOP, self.buffer.width(), height - MENU_BARS_TOP);
            let mono = self.mono();
            BarChart::new(view.data).paint(&mut self.buffer, area, &self.theme, mono);
        }
    }
}
