//! Selection sort, animated once per outer pass.

use std::ops::ControlFlow;

use crate::order::Order;
use crate::step::{SortStats, StepSink, Tracker};

/// Sort `seq` in place.
///
/// Each outer pass scans the unsorted suffix for the element that belongs
/// first, swaps it into position `i` (when it isn't already there), and
/// emits a single step highlighting `(i, selected)`. A sequence of length
/// `n` produces exactly `n - 1` steps.
pub fn selection_sort<T, S>(seq: &mut [T], order: Order, sink: &mut S) -> SortStats
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let mut tracker = Tracker::new(sink);
    let flow = passes(seq, order, &mut tracker);
    tracker.finish(flow)
}

fn passes<T, S>(seq: &mut [T], order: Order, tracker: &mut Tracker<'_, S>) -> ControlFlow<()>
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut selected = i;
        for j in i + 1..n {
            if order.precedes(&seq[j], &seq[selected]) {
                selected = j;
            }
        }
        if selected != i {
            seq.swap(i, selected);
            tracker.swapped(1);
        }
        tracker.emit(seq, i, selected)?;
    }
    ControlFlow::Continue(())
}
