//! Insertion sort by adjacent swaps.

use std::ops::ControlFlow;

use crate::order::Order;
use crate::step::{SortStats, StepSink, Tracker};

/// Sort `seq` in place, sinking each element left through adjacent swaps.
/// One step per swap, highlighting `(j, j - 1)`.
pub fn insertion_sort<T, S>(seq: &mut [T], order: Order, sink: &mut S) -> SortStats
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
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && order.precedes(&seq[j], &seq[j - 1]) {
            seq.swap(j, j - 1);
            tracker.swapped(1);
            tracker.emit(seq, j, j - 1)?;
            j -= 1;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Discard, Step, StepControl};

    #[test]
    fn test_ascending_trace() {
        let mut seq = [5, 3, 8, 1];
        let mut pairs = Vec::new();
        let stats = insertion_sort(&mut seq, Order::Ascending, &mut |step: Step<'_, i32>| {
            pairs.push((step.a, step.b));
            StepControl::Continue
        });
        assert_eq!(seq, [1, 3, 5, 8]);
        assert_eq!(pairs, vec![(1, 0), (3, 2), (2, 1), (1, 0)]);
        assert_eq!(stats.steps, stats.swaps);
    }

    #[test]
    fn test_descending() {
        let mut seq = [5, 3, 8, 1];
        insertion_sort(&mut seq, Order::Descending, &mut Discard);
        assert_eq!(seq, [8, 5, 3, 1]);
    }

    #[test]
    fn test_sorted_input_emits_nothing() {
        let mut seq = [1, 2, 3, 4];
        let stats = insertion_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(stats.steps, 0);
        assert!(stats.completed);
    }

    #[test]
    fn test_reverse_input_emits_inversion_count() {
        let mut seq = [4, 3, 2, 1];
        let stats = insertion_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(stats.steps, 6);
    }
}
