//! Combination combinators: sequential chaining, cartesian products and
//! repetition.
//!
//! `product` and `repeat` traverse one of their operands more than once, so
//! that operand must be restartable. A single-pass operand fails with
//! `IllegalState` at the first pull that needs the second traversal.

use std::ops::Add;

use crate::sequence::{
    Arrangement, Extent, LazySequence, SequenceError, SizeArgument, Traversal, checked_size,
    spliced,
};

impl<T: 'static> LazySequence<T> {
    /// Emits all of `self`, then all of `other`.
    ///
    /// If `self` is infinite, `other` is never reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let letters = LazySequence::of(["a", "b", "c"]);
    /// let more = LazySequence::of(["d", "e"]);
    /// assert_eq!(letters.concat(&more).to_vec(), Ok(vec!["a", "b", "c", "d", "e"]));
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::with_rule(self.extent().combine(other.extent()), move || {
            let second = second.clone();
            Traversal::from_steps(
                first
                    .traverse()
                    .chain(std::iter::once_with(move || second.traverse()).flatten()),
            )
        })
    }

    /// Repeats the full traversal of `self` `times` times.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `times` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let cycled = LazySequence::from_restartable_iter(0..2).repeat(2)?;
    /// assert_eq!(cycled.to_vec(), Ok(vec![0, 1, 0, 1]));
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    pub fn repeat<N: SizeArgument>(&self, times: N) -> Result<Self, SequenceError> {
        let times = checked_size("repeat", times)?;
        let source = self.clone();
        let extent = if times == 0 {
            Extent::Finite
        } else {
            self.extent()
        };
        Ok(Self::with_rule(extent, move || {
            let source = source.clone();
            Traversal::from_steps((0..times).flat_map(move |_| source.traverse()))
        }))
    }

    /// Pairs every element of `self` (outer) with every element of `other`
    /// (inner).
    ///
    /// `other` is re-traversed once per element of `self`. If `other` is
    /// infinite, only the pairs of the first outer element are reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let numbers = LazySequence::from_restartable_iter(0..2);
    /// let symbols = LazySequence::of(['a', 'b']);
    /// assert_eq!(
    ///     numbers.product(&symbols).to_vec(),
    ///     Ok(vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')])
    /// );
    /// ```
    pub fn product<U>(&self, other: &LazySequence<U>) -> LazySequence<(T, U)>
    where
        T: Clone,
        U: 'static,
    {
        let outer = self.clone();
        let inner = other.clone();
        LazySequence::with_rule(self.extent().nest(other.extent()), move || {
            let inner = inner.clone();
            Traversal::from_steps(outer.traverse().flat_map(move |step| match step {
                Ok(left) => Traversal::from_steps(
                    inner
                        .traverse()
                        .map(move |right| right.map(|right| (left.clone(), right))),
                ),
                Err(error) => Traversal::failed(error),
            }))
        })
    }

    /// Wraps every element in a one-element [`Arrangement`].
    ///
    /// This lifts plain elements into the form [`flat_product`] splices.
    ///
    /// [`flat_product`]: LazySequence::flat_product
    pub fn singletons(&self) -> LazySequence<Arrangement<T>> {
        self.map(|value| {
            let mut arrangement = Arrangement::new();
            arrangement.push(value);
            arrangement
        })
    }
}

impl<T: Clone + 'static> LazySequence<Arrangement<T>> {
    /// Cartesian product that splices arrangements instead of nesting them.
    ///
    /// The traversal order is that of [`LazySequence::product`]; each pair of
    /// arrangements `[a...]`, `[b...]` becomes `[a..., b...]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::{Arrangement, LazySequence};
    /// use smallvec::smallvec;
    ///
    /// let pairs: LazySequence<Arrangement<i32>> = LazySequence::of([smallvec![1, 2]]);
    /// let tails = LazySequence::of([7, 8]).singletons();
    /// let spliced: Vec<Vec<i32>> = pairs
    ///     .flat_product(&tails)
    ///     .map(|arrangement| arrangement.to_vec())
    ///     .to_vec()?;
    /// assert_eq!(spliced, vec![vec![1, 2, 7], vec![1, 2, 8]]);
    /// # Ok::<(), lazars::sequence::SequenceError>(())
    /// ```
    #[must_use]
    pub fn flat_product(&self, other: &Self) -> Self {
        self.product(other).map(|(left, right)| spliced(left, right))
    }
}

impl<T: 'static> Add for LazySequence<T> {
    type Output = Self;

    /// Same as [`LazySequence::concat`].
    fn add(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: 'static> Add for &LazySequence<T> {
    type Output = LazySequence<T>;

    fn add(self, other: Self) -> LazySequence<T> {
        self.concat(other)
    }
}
