//! Coroutine production rules.
//!
//! [`LazySequence::generate`] accepts a production rule written as an
//! `async` block that pushes elements through an [`Emitter`]. Each
//! `emitter.emit(value).await` suspends the rule exactly at the emission;
//! the next pull resumes it from that point. This lets a rule keep its
//! position in arbitrarily nested loops or recursion without an explicit
//! state machine.
//!
//! The rule is polled with a no-op waker, so it must only await emissions
//! (or other rules' emissions it forwards). Awaiting a future that is
//! pending for any other reason fails the pull with
//! [`IllegalStateError::SuspendedWithoutEmission`].
//!
//! # Examples
//!
//! ```rust
//! use lazars::sequence::LazySequence;
//!
//! let fibonacci = LazySequence::generate(|emitter| async move {
//!     let (mut current, mut next) = (0_u64, 1_u64);
//!     while let Some(following) = current.checked_add(next) {
//!         emitter.emit(current).await;
//!         (current, next) = (next, following);
//!     }
//! });
//!
//! assert_eq!(
//!     fibonacci.take(8).to_vec(),
//!     Ok(vec![0, 1, 1, 2, 3, 5, 8, 13])
//! );
//! ```

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::noop_waker_ref;

use super::error::IllegalStateError;
use super::extent::Extent;
use super::lazy_sequence::LazySequence;
use super::traversal::{Step, Traversal};

/// The handle a coroutine rule uses to hand elements to the puller.
pub struct Emitter<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Emitter<T> {
    /// Hands `value` to the puller and suspends the rule until the next pull.
    pub fn emit(&self, value: T) -> Emission<'_, T> {
        Emission {
            slot: &self.slot,
            value: Some(value),
        }
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Emitter").finish_non_exhaustive()
    }
}

/// The future returned by [`Emitter::emit`].
///
/// The first poll stores the element and suspends; the second poll, made by
/// the next pull, completes.
#[must_use = "an emission does nothing unless awaited"]
pub struct Emission<'a, T> {
    slot: &'a RefCell<Option<T>>,
    value: Option<T>,
}

// The element is moved out by value, never pinned in place.
impl<T> Unpin for Emission<'_, T> {}

impl<T> Future for Emission<'_, T> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _context: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                *this.slot.borrow_mut() = Some(value);
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

/// Drives a suspended rule one emission at a time.
struct Coroutine<T> {
    rule: Option<LocalBoxFuture<'static, ()>>,
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Iterator for Coroutine<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let rule = self.rule.as_mut()?;
        let mut context = Context::from_waker(noop_waker_ref());
        match rule.as_mut().poll(&mut context) {
            Poll::Ready(()) => {
                self.rule = None;
                None
            }
            Poll::Pending => {
                let emitted = self.slot.borrow_mut().take();
                if let Some(value) = emitted {
                    Some(Ok(value))
                } else {
                    tracing::debug!("coroutine rule suspended without emitting");
                    self.rule = None;
                    Some(Err(IllegalStateError::SuspendedWithoutEmission.into()))
                }
            }
        }
    }
}

impl<T: 'static> LazySequence<T> {
    /// Creates a sequence from a coroutine production rule.
    ///
    /// `rule` is called once per traversal with a fresh [`Emitter`]; the
    /// future it returns is only polled as the traversal is pulled. When the
    /// future completes, the traversal is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let pairs = LazySequence::generate(|emitter| async move {
    ///     for outer in 0..2 {
    ///         for inner in ['a', 'b'] {
    ///             emitter.emit((outer, inner)).await;
    ///         }
    ///     }
    /// });
    ///
    /// assert_eq!(
    ///     pairs.to_vec(),
    ///     Ok(vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')])
    /// );
    /// ```
    pub fn generate<F, Fut>(rule: F) -> Self
    where
        F: Fn(Emitter<T>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Self::with_rule(Extent::Unknown, move || {
            let slot = Rc::new(RefCell::new(None));
            let emitter = Emitter {
                slot: Rc::clone(&slot),
            };
            Traversal::from_steps(Coroutine {
                rule: Some(rule(emitter).boxed_local()),
                slot,
            })
        })
    }
}
