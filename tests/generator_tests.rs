#![cfg(feature = "generator")]
//! Integration tests for coroutine production rules.

use lazars::sequence::{IllegalStateError, LazySequence, SequenceError};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

#[rstest]
fn generate_emits_in_order() {
    let countdown = LazySequence::generate(|emitter| async move {
        for value in (1..=3).rev() {
            emitter.emit(value).await;
        }
    });

    assert_eq!(countdown.to_vec(), Ok(vec![3, 2, 1]));
}

#[rstest]
fn generate_is_restartable() {
    let letters = LazySequence::generate(|emitter| async move {
        emitter.emit('x').await;
        emitter.emit('y').await;
    });

    assert_eq!(letters.to_vec(), Ok(vec!['x', 'y']));
    assert_eq!(letters.to_vec(), Ok(vec!['x', 'y']));
}

#[rstest]
fn generate_infinite_rule_blocks_only_when_pulled() {
    let naturals = LazySequence::generate(|emitter| async move {
        for value in 0_u64.. {
            emitter.emit(value).await;
        }
    });

    assert_eq!(naturals.take(3).to_vec(), Ok(vec![0, 1, 2]));
}

#[rstest]
fn generate_composes_with_combinators() {
    let squares = LazySequence::generate(|emitter| async move {
        for value in 1..=5 {
            emitter.emit(value * value).await;
        }
    });

    assert_eq!(
        squares.filter(|n| n % 2 == 1).to_vec(),
        Ok(vec![1, 9, 25])
    );
}

#[rstest]
fn generate_does_not_run_ahead() {
    let reached = Rc::new(Cell::new(0));
    let observed = Rc::clone(&reached);
    let sequence = LazySequence::generate(move |emitter| {
        let reached = Rc::clone(&observed);
        async move {
            for value in 0..10 {
                reached.set(value);
                emitter.emit(value).await;
            }
        }
    });

    assert_eq!(sequence.first(), Ok(Some(0)));
    assert_eq!(reached.get(), 0);
}

#[rstest]
fn generate_rejects_foreign_suspension() {
    let stalled: LazySequence<i32> = LazySequence::generate(|_emitter| async move {
        std::future::pending::<()>().await;
    });

    assert_eq!(
        stalled.first(),
        Err(SequenceError::IllegalState(
            IllegalStateError::SuspendedWithoutEmission
        ))
    );
}
