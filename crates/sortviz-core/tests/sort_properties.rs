//! Behavioral properties shared by every algorithm.
//!
//! Each test tries to break one claim about the animated sorts: output is
//! sorted and a permutation, snapshots are permutations, step counts are
//! exact where the animation promises them, and runs always reset.

use proptest::prelude::*;
use sortviz_core::{
    Algorithm, Discard, Order, RunController, RunSpec, Selection, Step, StepControl,
};

fn sorted_copy(values: &[i32], order: Order) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    if order == Order::Descending {
        expected.reverse();
    }
    expected
}

fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn bubble_ascending_reference_scenario() {
    let mut seq = vec![5, 3, 8, 1];
    let mut swaps_seen = Vec::new();
    let mut previous = seq.clone();
    Algorithm::Bubble.sort(&mut seq, Order::Ascending, &mut |step: Step<'_, i32>| {
        swaps_seen.push(step.sequence != previous.as_slice());
        previous = step.sequence.to_vec();
        StepControl::Continue
    });
    assert_eq!(seq, vec![1, 3, 5, 8]);
    assert_eq!(
        swaps_seen,
        vec![false, false, true, true, false, false, false, true, false, true, true, true]
    );
}

#[test]
fn bubble_sorted_input_round_trips() {
    for (values, order) in [
        (vec![1, 2, 3], Order::Ascending),
        (vec![3, 2, 1], Order::Descending),
    ] {
        let mut seq = values.clone();
        let first = Algorithm::Bubble.sort(&mut seq, order, &mut Discard);
        assert_eq!(first.swaps, 2);
        assert_eq!(seq, values);

        let second = Algorithm::Bubble.sort(&mut seq, order, &mut Discard);
        assert_eq!(second.swaps, 2);
        assert_eq!(seq, values);
    }

    let mut flat = vec![2, 2, 2];
    let stats = Algorithm::Bubble.sort(&mut flat, Order::Ascending, &mut Discard);
    assert_eq!(stats.swaps, 0);
}

#[test]
fn empty_input_emits_nothing() {
    for algorithm in Algorithm::ALL {
        for order in Order::ALL {
            let mut seq: Vec<i32> = vec![];
            let mut frames = 0;
            algorithm.sort(&mut seq, order, &mut |_: Step<'_, i32>| {
                frames += 1;
                StepControl::Continue
            });
            assert!(seq.is_empty());
            assert_eq!(frames, 0, "{algorithm} {order}");
        }
    }
}

#[test]
fn single_element_is_untouched() {
    for algorithm in Algorithm::ALL {
        for order in Order::ALL {
            let mut seq = vec![42];
            let stats = algorithm.sort(&mut seq, order, &mut Discard);
            assert_eq!(seq, vec![42]);
            assert_eq!(stats.swaps, 0);
        }
    }
}

#[test]
fn every_menu_run_resets() {
    let original = vec![9, 1, 8, 2, 7, 3];
    let mut controller = RunController::new(original.clone());
    for selection in Selection::all() {
        if let Selection::Run(spec) = selection {
            let report = controller.run(spec, &mut Discard);
            assert!(spec.order.is_sorted(&report.result), "{spec}");
            assert_eq!(controller.working(), original.as_slice(), "{spec}");
        }
    }
}

#[test]
fn stopping_is_honored_by_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let mut controller = RunController::new(vec![6, 5, 4, 3, 2, 1]);
        let mut frames = 0;
        let report = controller.run(
            RunSpec::new(algorithm, Order::Ascending),
            &mut |_: Step<'_, i32>| {
                frames += 1;
                if frames == 2 {
                    StepControl::Stop
                } else {
                    StepControl::Continue
                }
            },
        );
        assert_eq!(report.stats.steps, 2, "{algorithm}");
        assert!(!report.stats.completed);
        assert_eq!(controller.working(), &[6, 5, 4, 3, 2, 1]);
    }
}

// =============================================================================
// Properties
// =============================================================================

fn algorithms() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn orders() -> impl Strategy<Value = Order> {
    prop::sample::select(Order::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_output_sorted_permutation(
        values in prop::collection::vec(-20i32..20, 0..40),
        algorithm in algorithms(),
        order in orders(),
    ) {
        let mut seq = values.clone();
        let stats = algorithm.sort(&mut seq, order, &mut Discard);
        prop_assert!(stats.completed);
        prop_assert_eq!(seq, sorted_copy(&values, order));
    }

    #[test]
    fn prop_every_snapshot_is_permutation(
        values in prop::collection::vec(0i32..10, 0..24),
        algorithm in algorithms(),
        order in orders(),
    ) {
        let mut seq = values.clone();
        let mut ok = true;
        let mut in_bounds = true;
        algorithm.sort(&mut seq, order, &mut |step: Step<'_, i32>| {
            ok &= is_permutation(step.sequence, &values);
            in_bounds &= step.a < step.sequence.len() && step.b < step.sequence.len();
            StepControl::Continue
        });
        prop_assert!(ok);
        prop_assert!(in_bounds);
    }

    // Bubble compares against a moving reference index and shuffles sorted
    // input before restoring it; see `bubble_sorted_input_round_trips`.
    #[test]
    fn prop_sorted_input_needs_no_swaps(
        values in prop::collection::vec(-50i32..50, 0..40),
        algorithm in algorithms().prop_filter("bubble swaps sorted input", |a| *a != Algorithm::Bubble),
        order in orders(),
    ) {
        let sorted = sorted_copy(&values, order);
        let mut seq = sorted.clone();
        let first = algorithm.sort(&mut seq, order, &mut Discard);
        let second = algorithm.sort(&mut seq, order, &mut Discard);
        prop_assert_eq!(first.swaps, 0);
        prop_assert_eq!(second.swaps, 0);
        prop_assert_eq!(seq, sorted);
    }

    #[test]
    fn prop_bubble_steps_exact(values in prop::collection::vec(any::<i32>(), 0..30), order in orders()) {
        let n = values.len();
        let mut seq = values;
        let stats = Algorithm::Bubble.sort(&mut seq, order, &mut Discard);
        prop_assert_eq!(stats.steps, n * n.saturating_sub(1));
    }

    #[test]
    fn prop_selection_steps_exact(values in prop::collection::vec(any::<i32>(), 0..60), order in orders()) {
        let n = values.len();
        let mut seq = values;
        let stats = Algorithm::Selection.sort(&mut seq, order, &mut Discard);
        prop_assert_eq!(stats.steps, n.saturating_sub(1));
    }

    #[test]
    fn prop_controller_resets(
        values in prop::collection::vec(1i32..100, 0..30),
        option in 1u8..=10,
    ) {
        let mut controller = RunController::new(values.clone());
        let Some(Selection::Run(spec)) = Selection::from_option(option) else {
            return Err(TestCaseError::fail("menu option should be a run"));
        };
        let report = controller.run(spec, &mut Discard);
        prop_assert_eq!(controller.working(), values.as_slice());
        prop_assert!(spec.order.is_sorted(&report.result));
    }
}
