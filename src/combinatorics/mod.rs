//! Combinatorial generators over finite, restartable sequences.
//!
//! Four generators draw fixed-size [`Arrangement`](crate::sequence::Arrangement)s
//! from a source, each under its own [`Selection`] policy:
//!
//! - [`repeated_permutation`](crate::sequence::LazySequence::repeated_permutation)
//! - [`permutation`](crate::sequence::LazySequence::permutation)
//! - [`combination`](crate::sequence::LazySequence::combination)
//! - [`repeated_combination`](crate::sequence::LazySequence::repeated_combination)
//!
//! Each returns a lazy sequence; the `for_each_*` variants drive the
//! generator to completion immediately instead. Arrangements are produced in
//! lexicographic order of source positions and their counts match
//! [`Selection::cardinality`].
//!
//! # Examples
//!
//! ```rust
//! use lazars::combinatorics::Selection;
//! use lazars::sequence::LazySequence;
//!
//! let source = LazySequence::of([1, 2, 3, 4]);
//! for size in 0..=5 {
//!     let combinations = source.combination(size)?;
//!     assert_eq!(
//!         combinations.count()? as u128,
//!         Selection::Combination.cardinality(4, size as usize).unwrap()
//!     );
//! }
//! # Ok::<(), lazars::sequence::SequenceError>(())
//! ```

mod generators;
mod selection;

pub use selection::Selection;
