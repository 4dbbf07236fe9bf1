//! Direct crossterm rendering.
//!
//! ```text
//! painters → CellBuffer → DiffRenderer → crossterm
//! ```
//!
//! Painters write the whole frame every step; the cell buffer keeps only the
//! cells that actually changed dirty, and the renderer sends those in one
//! batched write.

mod cell_buffer;
mod diff_renderer;

pub use cell_buffer::{Cell, CellBuffer, Modifiers, Style};
pub use diff_renderer::{DiffRenderer, FlushStats};
