//! Set algebra over sequences: deduplication, union and difference.
//!
//! These combinators compare elements by value, so they require
//! `T: Clone + Eq + Hash`. They keep hash sets of elements:
//!
//! | Operation    | Memory                                   |
//! |--------------|------------------------------------------|
//! | `uniq`       | O(distinct elements seen so far)         |
//! | `union`      | O(distinct elements seen so far)         |
//! | `difference` | O(distinct elements of the right operand) |
//!
//! `uniq` over an infinite source with unboundedly many distinct elements
//! therefore grows without bound.
//!
//! # Hashing
//!
//! The hasher is selected by feature flag: the standard library's
//! `RandomState` by default, `rustc-hash` with `fxhash`, or `ahash` with
//! `ahash`.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{BitAnd, Sub};

use crate::sequence::{IllegalStateError, LazySequence, SequenceError, Traversal};

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

/// The set of elements a set-algebra combinator has already observed.
type SeenSet<T> = HashSet<T, SeenHasher>;

impl<T: Clone + Eq + Hash + 'static> LazySequence<T> {
    /// Emits each element the first time it appears, suppressing repeats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let repeated = LazySequence::of([0, 0, 1, 0, 0, 1, 2]);
    /// assert_eq!(repeated.uniq().to_vec(), Ok(vec![0, 1, 2]));
    /// ```
    #[must_use]
    pub fn uniq(&self) -> Self {
        let source = self.clone();
        Self::with_rule(self.extent().weaken(), move || {
            let mut seen = SeenSet::default();
            Traversal::from_steps(source.traverse().filter(move |step| match step {
                Ok(value) => seen.insert(value.clone()),
                Err(_) => true,
            }))
        })
    }

    /// Emits the elements of `self` then `other`, without repeats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let left = LazySequence::from_restartable_iter(3..=5);
    /// let right = LazySequence::from_restartable_iter(1..=7);
    /// assert_eq!((left & right).to_vec(), Ok(vec![3, 4, 5, 1, 2, 6, 7]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.concat(other).uniq()
    }

    /// Emits the elements of `self` that do not occur in `other`.
    ///
    /// `other` is drained into a hash set at the first pull; it must be
    /// finite. An `other` known to be infinite fails that pull with
    /// `IllegalState`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let left = LazySequence::from_restartable_iter(1..=9);
    /// let right = LazySequence::from_restartable_iter(5..=8);
    /// assert_eq!((left - right).to_vec(), Ok(vec![1, 2, 3, 4, 9]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let source = self.clone();
        let excluded = other.clone();
        Self::with_rule(self.extent().weaken(), move || {
            let source = source.clone();
            let excluded = excluded.clone();
            Traversal::from_steps(
                std::iter::once_with(move || match exclusion_set(&excluded) {
                    Ok(excluded) => Traversal::from_steps(source.traverse().filter(move |step| {
                        step.as_ref().map_or(true, |value| !excluded.contains(value))
                    })),
                    Err(error) => Traversal::failed(error),
                })
                .flatten(),
            )
        })
    }
}

/// Drains the right operand of a difference into a lookup set.
fn exclusion_set<T>(excluded: &LazySequence<T>) -> Result<SeenSet<T>, SequenceError>
where
    T: Eq + Hash,
{
    if excluded.extent().is_infinite() {
        tracing::debug!("difference refused an infinite right operand");
        return Err(IllegalStateError::UnboundedSource {
            operation: "difference",
        }
        .into());
    }
    let set: SeenSet<T> = excluded.traverse().collect::<Result<_, _>>()?;
    tracing::trace!(excluded = set.len(), "materialized difference operand");
    Ok(set)
}

impl<T: Clone + Eq + Hash + 'static> BitAnd for LazySequence<T> {
    type Output = Self;

    /// Same as [`LazySequence::union`].
    fn bitand(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<T: Clone + Eq + Hash + 'static> Sub for LazySequence<T> {
    type Output = Self;

    /// Same as [`LazySequence::difference`].
    fn sub(self, other: Self) -> Self {
        self.difference(&other)
    }
}
