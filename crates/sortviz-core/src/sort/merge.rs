//! Bottom-up merge sort that merges in place by rotation.
//!
//! Rotating instead of copying through a scratch buffer keeps every
//! intermediate snapshot a permutation of the input, so the animation never
//! shows duplicated or missing bars.

use std::ops::ControlFlow;

use crate::order::Order;
use crate::step::{SortStats, StepSink, Tracker};

/// Sort `seq` in place. Runs of width 1, 2, 4, ... are merged pairwise.
/// Each comparison emits a step highlighting `(left, right)` cursors.
/// Stable: an element from the right run only moves ahead of a strictly
/// later-ordered element from the left run.
pub fn merge_sort<T, S>(seq: &mut [T], order: Order, sink: &mut S) -> SortStats
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let mut tracker = Tracker::new(sink);
    let flow = widths(seq, order, &mut tracker);
    tracker.finish(flow)
}

fn widths<T, S>(seq: &mut [T], order: Order, tracker: &mut Tracker<'_, S>) -> ControlFlow<()>
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let n = seq.len();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = (mid + width).min(n);
            merge_runs(seq, (lo, mid, hi), order, tracker)?;
            lo = hi;
        }
        width *= 2;
    }
    ControlFlow::Continue(())
}

fn merge_runs<T, S>(
    seq: &mut [T],
    (lo, mid, hi): (usize, usize, usize),
    order: Order,
    tracker: &mut Tracker<'_, S>,
) -> ControlFlow<()>
where
    T: PartialOrd,
    S: StepSink<T> + ?Sized,
{
    let mut left = lo;
    let mut right = mid;
    while left < right && right < hi {
        let (a, b) = (left, right);
        if order.precedes(&seq[right], &seq[left]) {
            seq[left..=right].rotate_right(1);
            tracker.swapped(1);
            right += 1;
        }
        left += 1;
        tracker.emit(seq, a, b)?;
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
        merge_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(seq, [1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_descending() {
        let mut seq = [5, 3, 8, 1, 9, 2, 7];
        merge_sort(&mut seq, Order::Descending, &mut Discard);
        assert_eq!(seq, [9, 8, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_trace_on_four() {
        let mut seq = [5, 3, 8, 1];
        let mut pairs = Vec::new();
        merge_sort(&mut seq, Order::Ascending, &mut |step: Step<'_, i32>| {
            pairs.push((step.a, step.b));
            StepControl::Continue
        });
        // width 1: [5|3] -> [3,5], [8|1] -> [1,8]; width 2: [3,5|1,8]
        assert_eq!(pairs, vec![(0, 1), (2, 3), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(seq, [1, 3, 5, 8]);
    }

    #[test]
    fn test_stable_on_keys() {
        #[derive(Debug, Clone, Copy)]
        struct Keyed(u8, char);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut seq = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        merge_sort(&mut seq, Order::Ascending, &mut Discard);
        let tags: Vec<char> = seq.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_sorted_input_no_moves() {
        let mut seq = [1, 2, 3, 4, 5];
        let stats = merge_sort(&mut seq, Order::Ascending, &mut Discard);
        assert_eq!(stats.swaps, 0);
        assert_eq!(seq, [1, 2, 3, 4, 5]);
    }
}
