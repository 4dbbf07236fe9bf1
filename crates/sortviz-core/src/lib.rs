//! Core of the sortviz sorting animation.
//!
//! This crate has no terminal code. It provides:
//! - Step-emitting sorts: [`sort`], driven through [`Algorithm`]
//! - The step contract: [`Step`], [`StepSink`], [`StepControl`]
//! - Input data: [`SequenceGenerator`] and the [`Frozen`] original
//! - Run control with reset between runs: [`RunController`]
//! - The numbered menu model: [`Selection`]
//! - YAML configuration: [`SortvizConfig`]
//!
//! # Example
//!
//! ```
//! use sortviz_core::{Algorithm, Order, RunController, RunSpec, Step, StepControl};
//!
//! let mut controller = RunController::new(vec![5, 3, 8, 1]);
//! let mut frames = 0;
//! let report = controller.run(
//!     RunSpec::new(Algorithm::Bubble, Order::Ascending),
//!     &mut |_step: Step<'_, i32>| {
//!         frames += 1;
//!         StepControl::Continue
//!     },
//! );
//!
//! assert_eq!(report.result, vec![1, 3, 5, 8]);
//! assert_eq!(frames, 12);
//! assert_eq!(controller.working(), &[5, 3, 8, 1]);
//! ```

mod color;
pub mod config;
mod error;
pub mod generator;
mod menu;
mod order;
mod run;
pub mod seed;
pub mod sort;
mod step;

pub use color::Color;
pub use config::{DelayConfig, SequenceConfig, SortvizConfig, ThemeConfig};
pub use error::SortvizError;
pub use generator::{Frozen, SequenceGenerator};
pub use menu::{RunSpec, Selection};
pub use order::Order;
pub use run::{RunController, RunReport};
pub use sort::Algorithm;
pub use step::{Discard, SortStats, Step, StepControl, StepSink};
