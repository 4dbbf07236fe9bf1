//! Run control: one frozen original, one working copy, reset around every
//! run.

use rand::Rng;
use tracing::{debug, info};

use crate::generator::{Frozen, SequenceGenerator};
use crate::menu::RunSpec;
use crate::step::{SortStats, StepSink};

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport<T> {
    /// What was run.
    pub spec: RunSpec,
    /// Counters from the algorithm.
    pub stats: SortStats,
    /// The working sequence as the algorithm left it.
    pub result: Vec<T>,
}

/// Owns the frozen original and the working sequence.
///
/// Invariant: outside of [`RunController::run`], `working()` equals
/// `original()`.
#[derive(Debug, Clone)]
pub struct RunController<T> {
    original: Frozen<T>,
    working: Vec<T>,
}

impl<T: Clone + PartialOrd> RunController<T> {
    /// Start from `values`, freezing a copy as the original.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        let original = Frozen::new(&values);
        Self {
            original,
            working: values,
        }
    }

    /// The frozen original.
    #[must_use]
    pub const fn original(&self) -> &Frozen<T> {
        &self.original
    }

    /// The working sequence (between runs, a copy of the original).
    #[must_use]
    pub fn working(&self) -> &[T] {
        &self.working
    }

    /// Restore the working sequence from the frozen original.
    pub fn reset(&mut self) {
        self.original.restore(&mut self.working);
    }

    /// Run `spec` against a freshly reset working copy, then reset again.
    pub fn run<S>(&mut self, spec: RunSpec, sink: &mut S) -> RunReport<T>
    where
        S: StepSink<T> + ?Sized,
    {
        self.reset();
        info!(%spec, len = self.working.len(), "run started");

        let stats = spec.algorithm.sort(&mut self.working, spec.order, sink);

        info!(
            %spec,
            steps = stats.steps,
            swaps = stats.swaps,
            completed = stats.completed,
            "run finished"
        );

        let result = std::mem::replace(&mut self.working, self.original.thaw());
        RunReport {
            spec,
            stats,
            result,
        }
    }

    /// Replace the frozen original with freshly generated data.
    pub fn regenerate<R>(&mut self, generator: &SequenceGenerator<T>, rng: &mut R)
    where
        T: rand::distributions::uniform::SampleUniform + Copy + std::fmt::Display,
        R: Rng + ?Sized,
    {
        let values = generator.generate(rng);
        debug!(len = values.len(), "regenerated sequence");
        self.original = Frozen::new(&values);
        self.working = values;
    }
}
