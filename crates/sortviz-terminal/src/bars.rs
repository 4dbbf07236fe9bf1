//! Bar chart painter.
//!
//! One bar per element when the sequence fits the width, centered, each bar
//! `width / n` columns wide. Longer sequences are bucketed: every column
//! stands for a contiguous run of elements and shows a highlighted one if
//! the run contains it, otherwise the run's largest value. Heights are
//! scaled from a baseline (the smallest value, or zero) to the largest value
//! and drawn in eighth blocks.

use sortviz_core::Step;

use crate::direct::{CellBuffer, Style};
use crate::theme::Theme;

/// Block characters by filled eighths, 0 through 8.
pub const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Full-cell fills that keep highlights visible without color.
const MONO_FILL_A: &str = "▓";
const MONO_FILL_B: &str = "▒";

/// Rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How a bar is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Plain,
    /// First position of the current step.
    A,
    /// Second position of the current step.
    B,
}

/// Element shown in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub mark: Mark,
}

/// Baseline and top of a chart. The baseline is the smallest value or zero,
/// whichever is lower, so all-positive data keeps a zero baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub low: f64,
    pub high: f64,
}

impl Scale {
    /// Height in eighths of a cell for a chart `rows` tall. Anything above
    /// the baseline gets at least one eighth.
    #[must_use]
    pub fn eighths(self, value: f64, rows: u16) -> usize {
        let span = self.high - self.low;
        let above = value - self.low;
        if span <= 0.0 || above <= 0.0 {
            return 0;
        }
        let full = f64::from(rows) * 8.0;
        ((above / span * full).round() as usize).max(1)
    }
}

/// A sequence plus the positions to highlight.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a, T> {
    values: &'a [T],
    highlight: Option<(usize, usize)>,
}

impl<'a, T> BarChart<'a, T>
where
    T: Copy + Into<f64>,
{
    /// Chart without highlights.
    #[must_use]
    pub const fn new(values: &'a [T]) -> Self {
        Self {
            values,
            highlight: None,
        }
    }

    /// Chart of a step snapshot.
    #[must_use]
    pub const fn from_step(step: Step<'a, T>) -> Self {
        Self {
            values: step.sequence,
            highlight: Some((step.a, step.b)),
        }
    }

    fn mark(&self, index: usize) -> Mark {
        match self.highlight {
            Some((a, _)) if a == index => Mark::A,
            Some((_, b)) if b == index => Mark::B,
            _ => Mark::Plain,
        }
    }

    /// Which element each of `width` columns shows. `None` is empty space.
    #[must_use]
    pub fn columns(&self, width: u16) -> Vec<Option<Column>> {
        let n = self.values.len();
        let w = usize::from(width);
        if n == 0 || w == 0 {
            return vec![None; w];
        }

        if n <= w {
            let bar_width = w / n;
            let offset = (w - bar_width * n) / 2;
            return (0..w)
                .map(|col| {
                    let rel = col.checked_sub(offset)?;
                    let index = rel / bar_width;
                    (index < n).then(|| Column {
                        index,
                        mark: self.mark(index),
                    })
                })
                .collect();
        }

        (0..w)
            .map(|col| {
                let bucket = col * n / w..(col + 1) * n / w;
                let chosen = bucket
                    .clone()
                    .find(|&i| self.mark(i) == Mark::A)
                    .or_else(|| bucket.clone().find(|&i| self.mark(i) == Mark::B))
                    .unwrap_or_else(|| self.tallest(bucket));
                Some(Column {
                    index: chosen,
                    mark: self.mark(chosen),
                })
            })
            .collect()
    }

    fn value(&self, index: usize) -> f64 {
        self.values[index].into()
    }

    /// First index holding the largest value in `range`.
    fn tallest(&self, range: std::ops::Range<usize>) -> usize {
        let start = range.start;
        range.fold(start, |best, i| {
            if self.value(i) > self.value(best) {
                i
            } else {
                best
            }
        })
    }

    /// Value range the bars are scaled against.
    #[must_use]
    pub fn scale(&self) -> Scale {
        let (low, high) = (0..self.values.len())
            .map(|i| self.value(i))
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Scale { low, high }
    }

    /// Paint every cell of `area`.
    pub fn paint(&self, buffer: &mut CellBuffer, area: Area, theme: &Theme, mono: bool) {
        if area.is_empty() {
            return;
        }
        let blank = Style::default();
        let scale = self.scale();
        for (col, column) in (0u16..).zip(self.columns(area.width)) {
            let x = area.x + col;
            let (height, style, fill) = match column {
                Some(Column { index, mark }) => {
                    let (color, fill) = match mark {
                        Mark::Plain => (theme.bar, EIGHTHS[8]),
                        Mark::A => (theme.highlight_a, if mono { MONO_FILL_A } else { EIGHTHS[8] }),
                        Mark::B => (theme.highlight_b, if mono { MONO_FILL_B } else { EIGHTHS[8] }),
                    };
                    let mut height = scale.eighths(self.value(index), area.height);
                    if mark != Mark::Plain {
                        height = height.max(1);
                    }
                    (height, Style::fg(color), fill)
                }
                None => (0, blank, EIGHTHS[0]),
            };

            for row in 0..area.height {
                let level = height.saturating_sub(usize::from(row) * 8).min(8);
                let symbol = if level == 8 { fill } else { EIGHTHS[level] };
                let y = area.y + area.height - 1 - row;
                buffer.update(x, y, symbol, if level == 0 { blank } else { style });
            }
        }
    }
}
