//! Elementary combinators: per-element pass-through, transformation and
//! index gating.
//!
//! Every combinator here wraps a single source and keeps its order. User
//! callbacks are invoked exactly once per source element that is reached,
//! and only as the result is driven.

use std::rc::Rc;

use crate::sequence::{
    Extent, LazySequence, SequenceError, SizeArgument, Traversal, checked_size,
};

impl<T: 'static> LazySequence<T> {
    /// Keeps only the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let evens = LazySequence::from_restartable_iter(0..10).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.to_vec(), Ok(vec![0, 2, 4, 6, 8]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::with_rule(self.extent().weaken(), move || {
            let predicate = Rc::clone(&predicate);
            Traversal::from_steps(
                source
                    .traverse()
                    .filter(move |step| step.as_ref().map_or(true, |value| predicate(value))),
            )
        })
    }

    /// Transforms every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let successors = LazySequence::from_restartable_iter(0..5).map(|n| n + 1);
    /// assert_eq!(successors.to_vec(), Ok(vec![1, 2, 3, 4, 5]));
    /// ```
    pub fn map<U, F>(&self, transform: F) -> LazySequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let source = self.clone();
        let transform = Rc::new(transform);
        LazySequence::with_rule(self.extent(), move || {
            let transform = Rc::clone(&transform);
            Traversal::from_steps(source.traverse().map(move |step| step.map(|value| transform(value))))
        })
    }

    /// Transforms every element, dropping those mapped to `None`.
    pub fn filter_map<U, F>(&self, transform: F) -> LazySequence<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        let source = self.clone();
        let transform = Rc::new(transform);
        LazySequence::with_rule(self.extent().weaken(), move || {
            let transform = Rc::clone(&transform);
            Traversal::from_steps(source.traverse().filter_map(move |step| match step {
                Ok(value) => transform(value).map(Ok),
                Err(error) => Some(Err(error)),
            }))
        })
    }

    /// Keeps only the elements whose 0-based position satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let words = LazySequence::of(["zero", "one", "two", "three", "four"]);
    /// let even_positions = words.filter_by_index(|index| index % 2 == 0);
    /// assert_eq!(even_positions.to_vec(), Ok(vec!["zero", "two", "four"]));
    /// ```
    #[must_use]
    pub fn filter_by_index<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::with_rule(self.extent().weaken(), move || {
            let predicate = Rc::clone(&predicate);
            Traversal::from_steps(
                source
                    .traverse()
                    .enumerate()
                    .filter(move |(index, step)| step.is_err() || predicate(*index))
                    .map(|(_, step)| step),
            )
        })
    }

    /// Drops the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let tail = LazySequence::from_restartable_iter(10..=15).skip(3)?;
    /// assert_eq!(tail.to_vec(), Ok(vec![13, 14, 15]));
    ///
    /// assert!(LazySequence::of([1]).skip(-1).is_err());
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    pub fn skip<N: SizeArgument>(&self, count: N) -> Result<Self, SequenceError> {
        let count = checked_size("skip", count)?;
        Ok(self.skip_unchecked(count))
    }

    pub(crate) fn skip_unchecked(&self, count: usize) -> Self {
        self.filter_by_index(move |index| index >= count)
            .with_extent(self.extent())
    }

    /// Drops the first `count` elements and drives the rest into `action`
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is negative, or the first failure
    /// of the traversal.
    pub fn skip_each<N, F>(&self, count: N, action: F) -> Result<(), SequenceError>
    where
        N: SizeArgument,
        F: FnMut(T),
    {
        self.skip(count)?.for_each(action)
    }

    /// Keeps at most the first `count` elements.
    ///
    /// This is how consumption of an infinite sequence is bounded.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let source = self.clone();
        Self::with_rule(Extent::Finite, move || {
            Traversal::from_steps(source.traverse().take(count))
        })
    }

    /// Pairs every element with a companion value derived from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let residues = LazySequence::from_restartable_iter(0..5).pair_with(|n| n % 3);
    /// assert_eq!(
    ///     residues.to_vec(),
    ///     Ok(vec![(0, 0), (1, 1), (2, 2), (3, 0), (4, 1)])
    /// );
    /// ```
    pub fn pair_with<U, F>(&self, companion: F) -> LazySequence<(T, U)>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.map(move |value| {
            let derived = companion(&value);
            (value, derived)
        })
    }

    /// Emits the running accumulator: for each element `x`, the accumulator
    /// becomes `function(accumulator, x)` and is emitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let running_sums = LazySequence::from_restartable_iter(1..=4).accumulate(0, |memo, n| memo + n);
    /// assert_eq!(running_sums.to_vec(), Ok(vec![1, 3, 6, 10]));
    /// ```
    pub fn accumulate<M, F>(&self, initial: M, function: F) -> LazySequence<M>
    where
        M: Clone + 'static,
        F: Fn(M, T) -> M + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        LazySequence::with_rule(self.extent(), move || {
            let function = Rc::clone(&function);
            Traversal::from_steps(source.traverse().scan(
                initial.clone(),
                move |memo, step| {
                    Some(step.map(|value| {
                        let next = function(memo.clone(), value);
                        *memo = next.clone();
                        next
                    }))
                },
            ))
        })
    }
}

impl<T: 'static> LazySequence<Option<T>> {
    /// Drops every `None`, unwrapping the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let sparse = LazySequence::of([Some(1), None, Some(1), None]);
    /// assert_eq!(sparse.compact().to_vec(), Ok(vec![1, 1]));
    /// ```
    pub fn compact(&self) -> LazySequence<T> {
        self.filter_map(std::convert::identity)
    }
}
