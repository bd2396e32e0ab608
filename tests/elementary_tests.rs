//! Integration tests for the elementary combinators.
//!
//! Tests cover:
//! - Laziness of user callbacks
//! - filter, map, filter_map, filter_by_index
//! - skip and skip_each, including negative sizes
//! - pair_with, accumulate, compact, take

use lazars::sequence::{InvalidArgumentError, LazySequence, SequenceError};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counting_predicate(calls: &Rc<Cell<usize>>) -> impl Fn(&i32) -> bool + 'static {
    let calls = Rc::clone(calls);
    move |n| {
        calls.set(calls.get() + 1);
        n % 2 == 0
    }
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn filter_defers_predicate_until_pulled() {
    let calls = Rc::new(Cell::new(0));
    let evens = LazySequence::from_restartable_iter(0..10).filter(counting_predicate(&calls));

    assert_eq!(calls.get(), 0);

    let mut traversal = evens.traverse();
    assert_eq!(traversal.next(), Some(Ok(0)));
    assert_eq!(calls.get(), 1);
    assert_eq!(traversal.next(), Some(Ok(2)));
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn filter_invokes_predicate_once_per_element() {
    let calls = Rc::new(Cell::new(0));
    let evens = LazySequence::from_restartable_iter(0..10).filter(counting_predicate(&calls));

    assert_eq!(evens.to_vec(), Ok(vec![0, 2, 4, 6, 8]));
    assert_eq!(calls.get(), 10);
}

#[rstest]
fn map_defers_transform_until_pulled() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let doubled = LazySequence::from_restartable_iter(0..5).map(move |n| {
        counter.set(counter.get() + 1);
        n * 2
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(doubled.first(), Ok(Some(0)));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn operators_compose_over_infinite_source() {
    let naturals = LazySequence::iterate(0_u64, |n| n + 1);
    let result = naturals
        .filter(|n| n % 3 == 0)
        .map(|n| n * n)
        .skip(1)
        .unwrap()
        .take(3);

    assert_eq!(result.to_vec(), Ok(vec![9, 36, 81]));
}

// =============================================================================
// Index Gating
// =============================================================================

#[rstest]
fn filter_by_index_uses_traversal_position() {
    let letters = LazySequence::of(['a', 'b', 'c', 'd', 'e']);
    let odd_positions = letters.filter_by_index(|index| index % 2 == 1);

    assert_eq!(odd_positions.to_vec(), Ok(vec!['b', 'd']));
}

#[rstest]
#[case(0_i64, vec![1, 2, 3])]
#[case(2_i64, vec![3])]
#[case(5_i64, vec![])]
fn skip_drops_prefix(#[case] count: i64, #[case] expected: Vec<i32>) {
    let sequence = LazySequence::of([1, 2, 3]);

    assert_eq!(sequence.skip(count).unwrap().to_vec(), Ok(expected));
}

#[rstest]
fn skip_rejects_negative_count() {
    let sequence = LazySequence::of([1, 2, 3]);

    assert_eq!(
        sequence.skip(-1).unwrap_err(),
        SequenceError::InvalidArgument(InvalidArgumentError {
            operation: "skip",
            argument: "-1".to_string(),
        })
    );
}

#[rstest]
fn skip_each_consumes_immediately() {
    let seen = RefCell::new(Vec::new());
    let result = LazySequence::of([1, 2, 3, 4]).skip_each(2, |n| seen.borrow_mut().push(n));

    assert_eq!(result, Ok(()));
    assert_eq!(seen.into_inner(), vec![3, 4]);
}

#[rstest]
fn skip_each_rejects_negative_count_without_traversing() {
    let calls = Cell::new(0);
    let result = LazySequence::of([1]).skip_each(-3, |_| calls.set(calls.get() + 1));

    assert!(result.unwrap_err().is_invalid_argument());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Derived Values
// =============================================================================

#[rstest]
fn pair_with_emits_value_and_companion() {
    let words = LazySequence::of(["a", "bb", "ccc"]);
    let with_lengths = words.pair_with(|word| word.len());

    assert_eq!(
        with_lengths.to_vec(),
        Ok(vec![("a", 1), ("bb", 2), ("ccc", 3)])
    );
}

#[rstest]
fn accumulate_emits_running_memo() {
    let products = LazySequence::from_restartable_iter(1..=5).accumulate(1, |memo, n| memo * n);

    assert_eq!(products.to_vec(), Ok(vec![1, 2, 6, 24, 120]));
    // The memo restarts from the initial value on every traversal.
    assert_eq!(products.to_vec(), Ok(vec![1, 2, 6, 24, 120]));
}

#[rstest]
fn fold_returns_final_memo() {
    let sum = LazySequence::from_restartable_iter(1..=100).fold(0, |memo, n| memo + n);

    assert_eq!(sum, Ok(5050));
}

#[rstest]
fn compact_drops_none() {
    let sparse = LazySequence::of([None, Some(1), None, Some(2), None]);

    assert_eq!(sparse.compact().to_vec(), Ok(vec![1, 2]));
}

#[rstest]
fn filter_map_keeps_some_results() {
    let parsed = LazySequence::of(["1", "x", "3"]).filter_map(|text| text.parse::<i32>().ok());

    assert_eq!(parsed.to_vec(), Ok(vec![1, 3]));
}

#[rstest]
fn take_bounds_consumption() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let naturals = LazySequence::iterate(0, |n| n + 1).map(move |n: i32| {
        counter.set(counter.get() + 1);
        n
    });

    assert_eq!(naturals.take(3).to_vec(), Ok(vec![0, 1, 2]));
    assert_eq!(pulls.get(), 3);
}
