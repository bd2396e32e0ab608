//! A single pass over a lazy sequence.

use std::fmt;
use std::iter::FusedIterator;

use super::error::SequenceError;

/// The outcome of one pull: an element, or the failure that stopped the
/// traversal.
pub type Step<T> = Result<T, SequenceError>;

/// One independent traversal of a [`LazySequence`](super::LazySequence).
///
/// A `Traversal` is the pull side of the sequence protocol. Each call to
/// [`Iterator::next`] drives the production rule just far enough to produce
/// one element:
///
/// - `Some(Ok(element))`: the next element
/// - `Some(Err(error))`: the traversal failed; it is finished afterwards
/// - `None`: the sequence is exhausted, and stays exhausted
///
/// # Examples
///
/// ```rust
/// use lazars::sequence::LazySequence;
///
/// let sequence = LazySequence::of([1, 2]);
/// let mut traversal = sequence.traverse();
///
/// assert_eq!(traversal.next(), Some(Ok(1)));
/// assert_eq!(traversal.next(), Some(Ok(2)));
/// assert_eq!(traversal.next(), None);
/// assert_eq!(traversal.next(), None);
/// ```
pub struct Traversal<T> {
    steps: Option<Box<dyn Iterator<Item = Step<T>>>>,
}

impl<T: 'static> Traversal<T> {
    /// Wraps an iterator of steps.
    #[inline]
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: Iterator<Item = Step<T>> + 'static,
    {
        Self {
            steps: Some(Box::new(steps)),
        }
    }

    /// Wraps an infallible iterator of elements.
    #[inline]
    pub fn from_values<I>(values: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self::from_steps(values.map(Ok))
    }

    /// A traversal that fails on its first pull.
    pub fn failed(error: impl Into<SequenceError>) -> Self {
        Self::from_steps(std::iter::once(Err(error.into())))
    }
}

impl<T> Traversal<T> {
    /// A traversal that is already exhausted.
    #[inline]
    pub const fn empty() -> Self {
        Self { steps: None }
    }

    /// Returns `true` once the traversal has signalled exhaustion or failure.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.steps.is_none()
    }
}

impl<T> Iterator for Traversal<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let steps = self.steps.as_mut()?;
        match steps.next() {
            Some(Ok(value)) => Some(Ok(value)),
            Some(Err(error)) => {
                self.steps = None;
                Some(Err(error))
            }
            None => {
                self.steps = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps
            .as_ref()
            .map_or((0, Some(0)), |steps| (0, steps.size_hint().1))
    }
}

impl<T> FusedIterator for Traversal<T> {}

impl<T> fmt::Debug for Traversal<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}
