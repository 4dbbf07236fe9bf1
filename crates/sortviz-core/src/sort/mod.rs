//! Step-emitting comparison sorts.
//!
//! Every algorithm mutates a slice in place, reports each animated
//! comparison to a [`StepSink`], and returns [`SortStats`]. They are generic
//! over any `T: PartialOrd`; the demo runs them on `i32`.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use std::fmt;
use std::time::Duration;

use crate::order::Order;
use crate::step::{SortStats, StepSink};

/// The sorting algorithms the demo can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
    ];

    /// Short lowercase key, matching the config's delay fields.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble sort",
            Self::Selection => "Selection sort",
            Self::Insertion => "Insertion sort",
            Self::Quick => "Quick sort",
            Self::Merge => "Merge sort",
        }
    }

    /// Pause after each step unless configured otherwise. Selection sort
    /// emits far fewer steps, so it gets the longest pause.
    #[must_use]
    pub const fn default_delay(self) -> Duration {
        Duration::from_millis(match self {
            Self::Bubble => 1,
            Self::Selection => 10,
            Self::Insertion => 2,
            Self::Quick | Self::Merge => 5,
        })
    }

    /// Run this algorithm over `seq`.
    pub fn sort<T, S>(self, seq: &mut [T], order: Order, sink: &mut S) -> SortStats
    where
        T: PartialOrd,
        S: StepSink<T> + ?Sized,
    {
        match self {
            Self::Bubble => bubble_sort(seq, order, sink),
            Self::Selection => selection_sort(seq, order, sink),
            Self::Insertion => insertion_sort(seq, order, sink),
            Self::Quick => quick_sort(seq, order, sink),
            Self::Merge => merge_sort(seq, order, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Discard, Step, StepControl};

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(a.key(), a.key().to_ascii_lowercase());
            assert!(Algorithm::ALL[i + 1..].iter().all(|b| b.key() != a.key()));
        }
    }

    #[test]
    fn test_delays_in_reference_range() {
        for algorithm in Algorithm::ALL {
            let ms = algorithm.default_delay().as_millis();
            assert!((1..=10).contains(&ms), "{algorithm}: {ms}ms");
        }
    }

    #[test]
    fn test_every_algorithm_handles_empty() {
        for algorithm in Algorithm::ALL {
            for order in Order::ALL {
                let mut seq: Vec<i32> = Vec::new();
                let stats = algorithm.sort(&mut seq, order, &mut Discard);
                assert_eq!(stats.steps, 0, "{algorithm} {order}");
                assert!(stats.completed);
            }
        }
    }

    #[test]
    fn test_every_algorithm_leaves_ties_alone() {
        for algorithm in Algorithm::ALL {
            for order in Order::ALL {
                let mut seq = vec![2, 2, 2];
                let stats = algorithm.sort(&mut seq, order, &mut Discard);
                assert_eq!(seq, vec![2, 2, 2]);
                assert_eq!(stats.swaps, 0, "{algorithm} {order}");
            }
        }
    }

    #[test]
    fn test_dyn_sink() {
        let mut count = 0usize;
        let mut closure = |_: Step<'_, i32>| {
            count += 1;
            StepControl::Continue
        };
        let sink: &mut dyn StepSink<i32> = &mut closure;
        let mut seq = vec![3, 1, 2];
        Algorithm::Selection.sort(&mut seq, Order::Ascending, sink);
        assert_eq!(seq, vec![1, 2, 3]);
        assert_eq!(count, 2);
    }
}
