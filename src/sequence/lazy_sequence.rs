//! The lazy sequence primitive.
//!
//! A [`LazySequence`] owns a production rule and nothing else. Each call to
//! [`LazySequence::traverse`] runs the rule from scratch and returns a
//! [`Traversal`] that produces elements one pull at a time. Combinators wrap
//! one or more sequences in a new rule, so no work happens until the
//! outermost sequence is driven.
//!
//! # Examples
//!
//! ```rust
//! use lazars::sequence::LazySequence;
//!
//! let evens = LazySequence::from_restartable_iter(0..10).filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), Ok(vec![0, 2, 4, 6, 8]));
//!
//! // Traversing again re-runs the rule from the beginning.
//! assert_eq!(evens.count(), Ok(5));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::error::{IllegalStateError, SequenceError};
use super::extent::Extent;
use super::traversal::Traversal;

/// A restartable, lazily produced sequence of elements.
///
/// Cloning a `LazySequence` is cheap: clones share the production rule.
/// Every traversal is independent of every other, provided the underlying
/// sources are restartable. A sequence built on [`LazySequence::once`] is
/// single-pass, and so is everything derived from it.
///
/// # Type Parameters
///
/// * `T` - The type of the elements
///
/// # Thread Safety
///
/// Production rules are shared through `Rc`, so a `LazySequence` is neither
/// `Send` nor `Sync`.
pub struct LazySequence<T> {
    rule: Rc<dyn Fn() -> Traversal<T>>,
    extent: Extent,
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        Self {
            rule: Rc::clone(&self.rule),
            extent: self.extent,
        }
    }
}

impl<T> LazySequence<T> {
    /// Starts a new, independent traversal.
    ///
    /// This is the only place a production rule runs. Nothing is pulled from
    /// the sources until the returned traversal is driven.
    #[inline]
    pub fn traverse(&self) -> Traversal<T> {
        (self.rule)()
    }

    /// The finiteness hint carried by this sequence.
    #[inline]
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Replaces the finiteness hint.
    ///
    /// Use this to declare that a rule the library cannot inspect is known to
    /// terminate, or known never to.
    #[must_use]
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: 'static> LazySequence<T> {
    /// Builds a sequence from a rule producing traversals directly.
    pub(crate) fn with_rule<F>(extent: Extent, rule: F) -> Self
    where
        F: Fn() -> Traversal<T> + 'static,
    {
        Self {
            rule: Rc::new(rule),
            extent,
        }
    }

    /// Creates a sequence from a rule that starts a fresh iterator.
    ///
    /// The rule is called once per traversal, never at construction time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let squares = LazySequence::from_rule(|| (1..=3).map(|n| n * n));
    /// assert_eq!(squares.to_vec(), Ok(vec![1, 4, 9]));
    /// ```
    pub fn from_rule<F, I>(rule: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::with_rule(Extent::Unknown, move || {
            Traversal::from_values(rule().into_iter())
        })
    }

    /// Creates a sequence from a rule whose traversals may fail.
    pub fn from_fallible_rule<F>(rule: F) -> Self
    where
        F: Fn() -> Traversal<T> + 'static,
    {
        Self::with_rule(Extent::Unknown, rule)
    }

    /// Creates a sequence that replays a cloned iterator on every traversal.
    ///
    /// The extent is derived from the iterator's size hint, so ranges such as
    /// `0..10` are known to be finite and `0..` is known to be infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::{Extent, LazySequence};
    ///
    /// let digits = LazySequence::from_restartable_iter(0..10);
    /// assert_eq!(digits.extent(), Extent::Finite);
    /// assert_eq!(digits.count(), Ok(10));
    /// ```
    pub fn from_restartable_iter<I>(iterator: I) -> Self
    where
        I: Iterator<Item = T> + Clone + 'static,
    {
        let extent = Extent::from_size_hint(iterator.size_hint());
        Self::with_rule(extent, move || Traversal::from_values(iterator.clone()))
    }

    /// Creates a single-pass sequence from an iterator.
    ///
    /// The first traversal consumes the iterator. Every later traversal fails
    /// on its first pull with [`IllegalStateError::AlreadyTraversed`].
    pub fn once<I>(iterator: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        let extent = Extent::from_size_hint(iterator.size_hint());
        let pending = RefCell::new(Some(iterator));
        Self::with_rule(extent, move || match pending.borrow_mut().take() {
            Some(iterator) => Traversal::from_values(iterator),
            None => {
                tracing::debug!("single-pass sequence traversed a second time");
                Traversal::failed(IllegalStateError::AlreadyTraversed)
            }
        })
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::with_rule(Extent::Finite, Traversal::empty)
    }
}

impl<T: Clone + 'static> LazySequence<T> {
    /// Creates a sequence over the elements of a vector.
    ///
    /// The vector is shared by every traversal; elements are cloned as they
    /// are produced.
    pub fn from_vec(values: Vec<T>) -> Self {
        let values: Rc<[T]> = values.into();
        Self::with_rule(Extent::Finite, move || {
            let values = Rc::clone(&values);
            Traversal::from_values((0..values.len()).map(move |index| values[index].clone()))
        })
    }

    /// Creates a sequence over the given elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let letters = LazySequence::of(["a", "b"]);
    /// assert_eq!(letters.to_vec(), Ok(vec!["a", "b"]));
    /// ```
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(values.into_iter().collect())
    }

    /// A sequence of exactly one element.
    pub fn single(value: T) -> Self {
        Self::with_rule(Extent::Finite, move || {
            Traversal::from_values(std::iter::once(value.clone()))
        })
    }

    /// An infinite sequence repeating one element.
    pub fn constant(value: T) -> Self {
        Self::with_rule(Extent::Infinite, move || {
            Traversal::from_values(std::iter::repeat(value.clone()))
        })
    }

    /// An infinite sequence `seed, step(seed), step(step(seed)), ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let powers = LazySequence::iterate(1_u32, |n| n * 2);
    /// assert_eq!(powers.take(5).to_vec(), Ok(vec![1, 2, 4, 8, 16]));
    /// ```
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        let step = Rc::new(step);
        Self::with_rule(Extent::Infinite, move || {
            let step = Rc::clone(&step);
            Traversal::from_values(std::iter::successors(Some(seed.clone()), move |current| {
                Some(step(current))
            }))
        })
    }
}

impl<T: Clone + 'static> From<Vec<T>> for LazySequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Clone + 'static> FromIterator<T> for LazySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::of(iterator)
    }
}

impl<T> IntoIterator for &LazySequence<T> {
    type Item = super::Step<T>;
    type IntoIter = Traversal<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

// =============================================================================
// Consumption
// =============================================================================

impl<T> LazySequence<T> {
    /// Drives a full traversal, applying `action` to each element.
    ///
    /// Returns the first failure, after which no further elements are
    /// pulled.
    pub fn for_each<F>(&self, mut action: F) -> Result<(), SequenceError>
    where
        F: FnMut(T),
    {
        for step in self.traverse() {
            action(step?);
        }
        Ok(())
    }

    /// Drives a full traversal, folding every element into an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let sum = LazySequence::from_restartable_iter(0..=5).fold(0, |memo, n| memo + n);
    /// assert_eq!(sum, Ok(15));
    /// ```
    pub fn fold<M, F>(&self, initial: M, mut function: F) -> Result<M, SequenceError>
    where
        F: FnMut(M, T) -> M,
    {
        self.traverse()
            .try_fold(initial, |memo, step| step.map(|value| function(memo, value)))
    }

    /// Collects a full traversal into a vector.
    pub fn to_vec(&self) -> Result<Vec<T>, SequenceError> {
        self.traverse().collect()
    }

    /// Counts the elements of a full traversal.
    pub fn count(&self) -> Result<usize, SequenceError> {
        self.fold(0, |count, _| count + 1)
    }

    /// Pulls the first element, if any.
    pub fn first(&self) -> Result<Option<T>, SequenceError> {
        self.traverse().next().transpose()
    }

    /// Tests membership by a linear scan, stopping at the first match.
    pub fn contains(&self, value: &T) -> Result<bool, SequenceError>
    where
        T: PartialEq,
    {
        for step in self.traverse() {
            if step? == *value {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySequence")
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(LazySequence<i32>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(LazySequence<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_from_rule_defers_until_traversal() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sequence = LazySequence::from_rule(move || {
            counter.set(counter.get() + 1);
            0..3
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.to_vec(), Ok(vec![0, 1, 2]));
        assert_eq!(calls.get(), 1);
        assert_eq!(sequence.to_vec(), Ok(vec![0, 1, 2]));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_once_fails_on_second_traversal() {
        let sequence = LazySequence::once(vec!['a', 'b'].into_iter());
        assert_eq!(sequence.to_vec(), Ok(vec!['a', 'b']));
        assert_eq!(
            sequence.to_vec(),
            Err(SequenceError::IllegalState(IllegalStateError::AlreadyTraversed))
        );
    }

    #[rstest]
    fn test_from_vec_is_restartable() {
        let sequence = LazySequence::from_vec(vec![3, 1, 2]);
        let mut first = sequence.traverse();
        let mut second = sequence.traverse();
        assert_eq!(first.next(), Some(Ok(3)));
        assert_eq!(second.next(), Some(Ok(3)));
        assert_eq!(first.next(), Some(Ok(1)));
        assert_eq!(sequence.extent(), Extent::Finite);
    }

    #[rstest]
    fn test_constant_is_infinite() {
        let sequence = LazySequence::constant(7);
        assert_eq!(sequence.extent(), Extent::Infinite);
        assert_eq!(sequence.first(), Ok(Some(7)));
    }

    #[rstest]
    fn test_contains_and_first() {
        let sequence = LazySequence::of([5, 6, 7]);
        assert_eq!(sequence.contains(&6), Ok(true));
        assert_eq!(sequence.contains(&8), Ok(false));
        assert_eq!(sequence.first(), Ok(Some(5)));
        assert_eq!(LazySequence::<i32>::empty().first(), Ok(None));
    }

    #[rstest]
    fn test_into_iterator_for_reference() {
        let sequence = LazySequence::of([1, 2, 3]);
        let doubled: Vec<i32> = (&sequence)
            .into_iter()
            .map(|step| step.map(|n| n * 2))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
