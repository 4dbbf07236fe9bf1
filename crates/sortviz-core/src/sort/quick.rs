//! Quicksort with Lomuto partitioning and an explicit range stack.

use std::ops::ControlFlow;

use crate::order::Order;
use crate::step::{SortStats, StepSink, Tracker};

/// Sort `seq` in place.
///
/// Each pending range `lo..=hi` is partitioned around its last element.
/// Every comparison against the pivot emits a step highlighting
/// `(j, pivot)`; moving the pivot into its final slot emits one more step.
/// Elements equal to the pivot are never exchanged.
/// Pending ranges live on a stack, smaller range on top, so the stack never
/// grows beyond `log2(n)` entries.
pub fn quick_sort<T, S>(seq: &mut [T], order: Order, sink: &mut S) -> SortStats
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let mut tracker = Tracker::new(sink);
    let flow = partitions(seq, order, &mut tracker);
    tracker.finish(flow)
}

fn partitions<T, S>(seq: &mut [T], order: Order, tracker: &mut Tracker<'_, S>) -> ControlFlow<()>
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if seq.len() > 1 {
        pending.push((0, seq.len() - 1));
    }

    while let Some((lo, hi)) = pending.pop() {
        let pivot = hi;
        let mut store = lo;
        for j in lo..hi {
            if order.precedes(&seq[j], &seq[pivot]) {
                if store != j {
                    seq.swap(store, j);
                    tracker.swapped(1);
                }
                store += 1;
            }
            tracker.emit(seq, j, pivot)?;
        }
        // An element equal to the pivot already sitting at `store` is as
        // good as the pivot itself.
        if store != pivot && order.precedes(&seq[pivot], &seq[store]) {
            seq.swap(store, pivot);
            tracker.swapped(1);
            tracker.emit(seq, store, pivot)?;
        }

        let left = (store > lo + 1).then(|| (lo, store - 1));
        let right = (hi > store + 1).then(|| (store + 1, hi));
        match (left, right) {
            (Some(l), Some(r)) => {
                if l.1 - l.0 > r.1 - r.0 {
                    pending.push(l);
                    pending.push(r);
                } else {
                    pending.push(r);
                    pending.push(l);
                }
            }
            (Some(range), None) | (None, Some(range)) => pending.push(range),
            (None, None) => {}
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Discard, Step, StepControl};

    #[test]
    fn test_ascending() {
        let mut seq = [5, 3, 8, 1, 9, 2, 7];
        quick_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(seq, [1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_descending() {
        let mut seq = [5, 3, 8, 1, 9, 2, 7];
        quick_sort(&mut seq, Order::Descending, &mut Discard);
        assert_eq!(seq, [9, 8, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_first_partition_highlights_pivot() {
        let mut seq = [5, 3, 8, 1];
        let mut pairs = Vec::new();
        quick_sort(&mut seq, Order::Ascending, &mut |step: Step<'_, i32>| {
            pairs.push((step.a, step.b));
            StepControl::Continue
        });
        // Pivot 1 at index 3: three comparisons, then the pivot moves to 0.
        assert_eq!(&pairs[..4], &[(0, 3), (1, 3), (2, 3), (0, 3)]);
        assert_eq!(seq, [1, 3, 5, 8]);
    }

    #[test]
    fn test_equal_elements_never_swap() {
        let mut seq = [2, 2, 2, 2];
        let stats = quick_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(stats.swaps, 0);
        assert_eq!(seq, [2, 2, 2, 2]);
    }

    #[test]
    fn test_two_elements() {
        let mut seq = [2, 1];
        let stats = quick_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(seq, [1, 2]);
        assert_eq!(stats.steps, 2);
    }
}
