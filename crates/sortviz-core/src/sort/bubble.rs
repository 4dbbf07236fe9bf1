//! Exchange sort against a moving reference position.
//!
//! Unlike the textbook adjacent-pair bubble sort, every position `j` is
//! compared with the outer position `i`. After outer pass `i` the prefix
//! `0..=i` is in order, so the whole sequence is sorted once `i` reaches the
//! end. Every comparison is animated, giving exactly `n * (n - 1)` steps.

use std::ops::ControlFlow;

use crate::order::Order;
use crate::step::{SortStats, StepSink, Tracker};

/// Sort `seq` in place, emitting one step per comparison with highlight
/// `(i, j)`.
///
/// # Example
///
/// ```
/// use sortviz_core::{sort::bubble_sort, Discard, Order};
///
/// let mut seq = [5, 3, 8, 1];
/// let stats = bubble_sort(&mut seq, Order::Ascending, &mut Discard);
///
/// assert_eq!(seq, [1, 3, 5, 8]);
/// assert_eq!(stats.steps, 12);
/// ```
pub fn bubble_sort<T, S>(seq: &mut [T], order: Order, sink: &mut S) -> SortStats
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
    for i in 0..n {
        for j in 0..n - 1 {
            if order.precedes(&seq[i], &seq[j]) {
                seq.swap(i, j);
                tracker.swapped(1);
            }
            tracker.emit(seq, i, j)?;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Discard, Step, StepControl};

    #[test]
    fn test_reference_trace() {
        let mut seq = [5, 3, 8, 1];
        let mut trace = Vec::new();
        let stats = bubble_sort(&mut seq, Order::Ascending, &mut |step: Step<'_, i32>| {
            trace.push((step.a, step.b, step.sequence.to_vec()));
            StepControl::Continue
        });

        let expected: Vec<(usize, usize, Vec<i32>)> = vec![
            (0, 0, vec![5, 3, 8, 1]),
            (0, 1, vec![5, 3, 8, 1]),
            (0, 2, vec![8, 3, 5, 1]),
            (1, 0, vec![3, 8, 5, 1]),
            (1, 1, vec![3, 8, 5, 1]),
            (1, 2, vec![3, 8, 5, 1]),
            (2, 0, vec![3, 8, 5, 1]),
            (2, 1, vec![3, 5, 8, 1]),
            (2, 2, vec![3, 5, 8, 1]),
            (3, 0, vec![1, 5, 8, 3]),
            (3, 1, vec![1, 3, 8, 5]),
            (3, 2, vec![1, 3, 5, 8]),
        ];
        assert_eq!(trace, expected);
        assert_eq!(seq, [1, 3, 5, 8]);
        assert_eq!(stats.swaps, 6);
        assert!(stats.completed);
    }

    #[test]
    fn test_descending() {
        let mut seq = [5, 3, 8, 1];
        bubble_sort(&mut seq, Order::Descending, &mut Discard);
        assert_eq!(seq, [8, 5, 3, 1]);
    }

    #[test]
    fn test_step_count_is_n_times_n_minus_one() {
        for n in 0..12usize {
            let mut seq: Vec<usize> = (0..n).rev().collect();
            let stats = bubble_sort(&mut seq, Order::Ascending, &mut Discard);
            assert_eq!(stats.steps, n * n.saturating_sub(1), "n = {n}");
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert_eq!(
            bubble_sort(&mut empty, Order::Ascending, &mut Discard).steps,
            0
        );
        let mut one = [7];
        assert_eq!(bubble_sort(&mut one, Order::Ascending, &mut Discard).steps, 0);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_stop_mid_run() {
        let mut seq = [4, 3, 2, 1];
        let stats = bubble_sort(&mut seq, Order::Ascending, &mut |_: Step<'_, i32>| {
            StepControl::Stop
        });
        assert_eq!(stats.steps, 1);
        assert!(!stats.completed);
    }
}
