//! Terminal front end for sortviz.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::doc_markdown)]
//!
//! Draws [`sortviz_core`] runs as bar charts with `crossterm`: a cell buffer
//! with dirty tracking, a differential renderer, and a menu loop that reads
//! digits from the keyboard.
//!
//! # Example
//!
//! ```
//! use sortviz_core::{Algorithm, Order, RunSpec, SortvizConfig};
//! use sortviz_terminal::{App, ColorMode, RunEnd, Session, TestableBackend};
//!
//! let mut config = SortvizConfig::default();
//! config.sequence.len = 8;
//! config.delays = sortviz_core::DelayConfig::uniform(0);
//!
//! let mut app = App::new(&config, ColorMode::Mono)?;
//! let mut backend = TestableBackend::new(Vec::new(), 40, 12);
//! let mut session = Session::enter(&mut backend)?;
//! let end = app.run(session.backend(), RunSpec::new(Algorithm::Merge, Order::Ascending))?;
//! session.finish()?;
//!
//! assert_eq!(end, RunEnd::Menu);
//! assert!(!backend.is_raw_mode());
//! # Ok::<(), sortviz_terminal::TuiError>(())
//! ```

mod app;
pub mod bars;
pub mod cli;
mod color;
pub mod direct;
mod error;
mod input;
pub mod logging;
mod screen;
mod terminal;
mod theme;

pub use app::{App, RunEnd};
pub use color::ColorMode;
pub use error::TuiError;
pub use input::{Input, LineInput};
pub use screen::{MenuView, Screen};
pub use terminal::{CrosstermBackend, Session, TerminalBackend, TestableBackend};
pub use theme::Theme;
