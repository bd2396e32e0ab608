#![cfg(feature = "set-algebra")]
//! Integration tests for uniq, union and difference.

use lazars::sequence::{IllegalStateError, LazySequence, SequenceError};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Deduplication
// =============================================================================

#[rstest]
#[case(vec![0, 0, 1, 0, 0, 1, 2], vec![0, 1, 2])]
#[case(vec![3, 2, 1, 2, 3], vec![3, 2, 1])]
#[case(vec![], vec![])]
fn uniq_keeps_first_occurrence(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(LazySequence::from_vec(input).uniq().to_vec(), Ok(expected));
}

#[rstest]
fn uniq_forgets_seen_elements_between_traversals() {
    let unique = LazySequence::of(["a", "b", "a"]).uniq();

    assert_eq!(unique.to_vec(), Ok(vec!["a", "b"]));
    assert_eq!(unique.to_vec(), Ok(vec!["a", "b"]));
}

#[rstest]
fn uniq_over_infinite_source_is_lazy() {
    let residues = LazySequence::iterate(0_u32, |n| n + 1).map(|n| n % 4).uniq();

    assert_eq!(residues.take(4).to_vec(), Ok(vec![0, 1, 2, 3]));
}

// =============================================================================
// Union
// =============================================================================

#[rstest]
fn union_is_concat_then_dedup() {
    let left = LazySequence::from_restartable_iter(3..=5);
    let right = LazySequence::from_restartable_iter(1..=7);

    assert_eq!(left.union(&right).to_vec(), Ok(vec![3, 4, 5, 1, 2, 6, 7]));
    assert_eq!((left & right).to_vec(), Ok(vec![3, 4, 5, 1, 2, 6, 7]));
}

#[rstest]
fn union_removes_duplicates_within_one_operand() {
    let left = LazySequence::of([1, 1, 2]);
    let right = LazySequence::of([2, 3, 3]);

    assert_eq!((left & right).to_vec(), Ok(vec![1, 2, 3]));
}

// =============================================================================
// Difference
// =============================================================================

#[rstest]
fn difference_filters_out_right_operand() {
    let left = LazySequence::from_restartable_iter(1..=9);
    let right = LazySequence::from_restartable_iter(5..=8);

    assert_eq!(left.difference(&right).to_vec(), Ok(vec![1, 2, 3, 4, 9]));
    assert_eq!((left - right).to_vec(), Ok(vec![1, 2, 3, 4, 9]));
}

#[rstest]
fn difference_materializes_right_operand_at_first_pull() {
    let restarts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&restarts);
    let right = LazySequence::from_rule(move || {
        counter.set(counter.get() + 1);
        vec![2]
    });
    let remaining = LazySequence::of([1, 2, 3]).difference(&right);

    assert_eq!(restarts.get(), 0);
    let mut traversal = remaining.traverse();
    assert_eq!(restarts.get(), 0);
    assert_eq!(traversal.next(), Some(Ok(1)));
    assert_eq!(traversal.next(), Some(Ok(3)));
    assert_eq!(traversal.next(), None);
    assert_eq!(restarts.get(), 1);
}

#[rstest]
fn difference_with_infinite_right_operand_fails_at_first_pull() {
    let left = LazySequence::of([1, 2, 3]);
    let right = LazySequence::iterate(0, |n| n + 1);
    let remaining = left - right;

    assert_eq!(
        remaining.first(),
        Err(SequenceError::IllegalState(IllegalStateError::UnboundedSource {
            operation: "difference"
        }))
    );
}

#[rstest]
fn difference_with_infinite_left_operand_stays_lazy() {
    let naturals = LazySequence::iterate(0, |n| n + 1);
    let evens = LazySequence::of([0, 2, 4, 6]);

    assert_eq!(
        naturals.difference(&evens).take(4).to_vec(),
        Ok(vec![1, 3, 5, 7])
    );
}

#[rstest]
fn difference_accepts_empty_product_with_infinite_inner_operand() {
    let excluded = LazySequence::<i32>::empty()
        .product(&LazySequence::constant(1))
        .map(|(left, _)| left);
    let left = LazySequence::of([1, 2, 3]);

    assert_eq!(left.difference(&excluded).to_vec(), Ok(vec![1, 2, 3]));
}
