//! Recursive arrangement generators.
//!
//! All four generators share one recursion:
//!
//! - size `0`: a single empty arrangement
//! - size `1`: every element as a one-element arrangement
//! - size `n > 1`: for each element at position `i`, prefix it onto every
//!   arrangement of size `n - 1` drawn from what the selection leaves of
//!   the source at `i`
//!
//! Repeated permutations take the shortcut of a flat cartesian product with
//! the generator one size down, which yields the same order.

use crate::sequence::{
    Arrangement, Extent, IllegalStateError, LazySequence, SequenceError, SizeArgument, Traversal,
    checked_size, prefixed,
};

use super::selection::Selection;

impl<T: Clone + 'static> LazySequence<T> {
    /// All arrangements of `size` elements under the given selection policy.
    ///
    /// The source must be finite and restartable. A source known to be
    /// infinite fails the first pull; a single-pass source fails the first
    /// pull that needs to traverse it again. Size `0` never touches the
    /// source and always yields a single empty arrangement.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative.
    pub fn arrangements<N: SizeArgument>(
        &self,
        selection: Selection,
        size: N,
    ) -> Result<LazySequence<Arrangement<T>>, SequenceError> {
        let size = checked_size(selection.name(), size)?;
        Ok(guarded(self, selection, size))
    }

    /// Drives every arrangement of `size` elements into `action` immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative, or the first failure
    /// of the traversal.
    pub fn for_each_arrangement<N, F>(
        &self,
        selection: Selection,
        size: N,
        action: F,
    ) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(Arrangement<T>),
    {
        self.arrangements(selection, size)?.for_each(action)
    }

    /// All `size`-tuples of source elements, repeats allowed, ordered with the
    /// first component varying slowest.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let bits = LazySequence::from_restartable_iter(0..2).repeated_permutation(2)?;
    /// let tuples: Vec<Vec<i32>> = bits.map(|tuple| tuple.to_vec()).to_vec()?;
    /// assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    pub fn repeated_permutation<N: SizeArgument>(
        &self,
        size: N,
    ) -> Result<LazySequence<Arrangement<T>>, SequenceError> {
        self.arrangements(Selection::RepeatedPermutation, size)
    }

    /// All orderings of `size` distinct source positions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let orderings = LazySequence::of(['a', 'b', 'c']).permutation(2)?;
    /// let words: Vec<String> = orderings.map(|tuple| tuple.iter().collect()).to_vec()?;
    /// assert_eq!(words, vec!["ab", "ac", "ba", "bc", "ca", "cb"]);
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    pub fn permutation<N: SizeArgument>(
        &self,
        size: N,
    ) -> Result<LazySequence<Arrangement<T>>, SequenceError> {
        self.arrangements(Selection::Permutation, size)
    }

    /// All subsets of `size` distinct source positions, in source order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let pairs = LazySequence::of([1, 2, 3, 4]).combination(2)?;
    /// assert_eq!(pairs.count(), Ok(6));
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    pub fn combination<N: SizeArgument>(
        &self,
        size: N,
    ) -> Result<LazySequence<Arrangement<T>>, SequenceError> {
        self.arrangements(Selection::Combination, size)
    }

    /// All multisets of `size` source elements, in source order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative.
    pub fn repeated_combination<N: SizeArgument>(
        &self,
        size: N,
    ) -> Result<LazySequence<Arrangement<T>>, SequenceError> {
        self.arrangements(Selection::RepeatedCombination, size)
    }

    /// Drives every repeated permutation of `size` elements into `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative, or the first failure
    /// of the traversal.
    pub fn for_each_repeated_permutation<N, F>(&self, size: N, action: F) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(Arrangement<T>),
    {
        self.for_each_arrangement(Selection::RepeatedPermutation, size, action)
    }

    /// Drives every permutation of `size` elements into `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative, or the first failure
    /// of the traversal.
    pub fn for_each_permutation<N, F>(&self, size: N, action: F) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(Arrangement<T>),
    {
        self.for_each_arrangement(Selection::Permutation, size, action)
    }

    /// Drives every combination of `size` elements into `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative, or the first failure
    /// of the traversal.
    pub fn for_each_combination<N, F>(&self, size: N, action: F) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(Arrangement<T>),
    {
        self.for_each_arrangement(Selection::Combination, size, action)
    }

    /// Drives every repeated combination of `size` elements into `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is negative, or the first failure
    /// of the traversal.
    pub fn for_each_repeated_combination<N, F>(&self, size: N, action: F) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(Arrangement<T>),
    {
        self.for_each_arrangement(Selection::RepeatedCombination, size, action)
    }
}

/// Wraps the recursion with the finiteness check and a trace event per
/// top-level traversal.
fn guarded<T: Clone + 'static>(
    source: &LazySequence<T>,
    selection: Selection,
    size: usize,
) -> LazySequence<Arrangement<T>> {
    if size > 0 && source.extent().is_infinite() {
        return LazySequence::with_rule(Extent::Finite, move || {
            tracing::debug!(%selection, size, "generator refused an infinite source");
            Traversal::failed(IllegalStateError::UnboundedSource {
                operation: selection.name(),
            })
        });
    }
    let extent = if size == 0 {
        Extent::Finite
    } else {
        source.extent().weaken()
    };
    let arrangements = recurse(source, selection, size);
    LazySequence::with_rule(extent, move || {
        tracing::trace!(%selection, size, "starting arrangement traversal");
        arrangements.traverse()
    })
}

fn recurse<T: Clone + 'static>(
    source: &LazySequence<T>,
    selection: Selection,
    size: usize,
) -> LazySequence<Arrangement<T>> {
    match (size, selection) {
        (0, _) => LazySequence::single(Arrangement::new()),
        (1, _) => source.singletons(),
        (_, Selection::RepeatedPermutation) => source
            .singletons()
            .flat_product(&recurse(source, selection, size - 1)),
        _ => prefix_each(source, selection, size),
    }
}

/// For each element at position `i`, prefixes it onto every arrangement of
/// `size - 1` elements of the remainder at `i`.
fn prefix_each<T: Clone + 'static>(
    source: &LazySequence<T>,
    selection: Selection,
    size: usize,
) -> LazySequence<Arrangement<T>> {
    let source = source.clone();
    LazySequence::with_rule(source.extent().weaken(), move || {
        let heads = source.traverse();
        let source = source.clone();
        Traversal::from_steps(heads.enumerate().flat_map(move |(index, step)| match step {
            Ok(head) => {
                let tails = recurse(&selection.remainder(&source, index), selection, size - 1);
                Traversal::from_steps(
                    tails
                        .traverse()
                        .map(move |tail| tail.map(|tail| prefixed(head.clone(), tail))),
                )
            }
            Err(error) => Traversal::failed(error),
        }))
    })
}
