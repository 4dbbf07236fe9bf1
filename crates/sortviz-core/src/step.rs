//! The per-step contract between a running sort and whoever draws it.
//!
//! Every algorithm in [`crate::sort`] hands a [`Step`] to a [`StepSink`]
//! after each comparison it animates. The sink sees the whole sequence as it
//! is at that moment plus the two positions involved, and answers with a
//! [`StepControl`]. Sorts never know anything about drawing.

use std::ops::ControlFlow;

/// Snapshot of one animation step.
#[derive(Debug)]
pub struct Step<'a, T> {
    /// Current contents of the working sequence.
    pub sequence: &'a [T],
    /// First highlighted position.
    pub a: usize,
    /// Second highlighted position.
    pub b: usize,
}

impl<T> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Step<'_, T> {}

impl<'a, T> Step<'a, T> {
    /// Create a step snapshot.
    #[must_use]
    pub const fn new(sequence: &'a [T], a: usize, b: usize) -> Self {
        Self { sequence, a, b }
    }

    /// Whether `index` is one of the two highlighted positions.
    #[must_use]
    pub const fn is_highlighted(&self, index: usize) -> bool {
        index == self.a || index == self.b
    }
}

/// What a sink wants the sort to do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepControl {
    /// Keep sorting.
    #[default]
    Continue,
    /// Abandon the run after this step.
    Stop,
}

impl StepControl {
    /// Bridge to `?`-style early returns inside the algorithms.
    pub(crate) const fn flow(self) -> ControlFlow<()> {
        match self {
            Self::Continue => ControlFlow::Continue(()),
            Self::Stop => ControlFlow::Break(()),
        }
    }
}

/// Consumer of animation steps.
pub trait StepSink<T> {
    /// Receive one snapshot.
    fn step(&mut self, step: Step<'_, T>) -> StepControl;
}

impl<T, F> StepSink<T> for F
where
    F: FnMut(Step<'_, T>) -> StepControl,
{
    fn step(&mut self, step: Step<'_, T>) -> StepControl {
        self(step)
    }
}

/// Sink that accepts every step and draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<T> StepSink<T> for Discard {
    fn step(&mut self, _step: Step<'_, T>) -> StepControl {
        StepControl::Continue
    }
}

/// Counters describing one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    /// Steps handed to the sink.
    pub steps: usize,
    /// Exchanges performed. For merge sort, elements moved ahead of the
    /// left run.
    pub swaps: usize,
    /// False when the sink stopped the run early.
    pub completed: bool,
}

/// Bookkeeping shared by all algorithms: counts steps and swaps and
/// forwards snapshots to the sink.
pub(crate) struct Tracker<'s, S: ?Sized> {
    sink: &'s mut S,
    stats: SortStats,
}

impl<'s, S: ?Sized> Tracker<'s, S> {
    pub(crate) fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            stats: SortStats::default(),
        }
    }

    pub(crate) fn emit<T>(&mut self, sequence: &[T], a: usize, b: usize) -> ControlFlow<()>
    where
        S: StepSink<T>,
    {
        self.stats.steps += 1;
        self.sink.step(Step::new(sequence, a, b)).flow()
    }

    pub(crate) fn swapped(&mut self, count: usize) {
        self.stats.swaps += count;
    }

    pub(crate) fn finish(mut self, flow: ControlFlow<()>) -> SortStats {
        self.stats.completed = flow.is_continue();
        self.stats
    }
}
