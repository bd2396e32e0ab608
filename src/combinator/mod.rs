//! Combinators over [`LazySequence`](crate::sequence::LazySequence).
//!
//! Every combinator is a method on `LazySequence` that wraps its operands in
//! a new production rule and returns another `LazySequence`, so results
//! compose freely:
//!
//! - **Elementary**: `filter`, `map`, `filter_map`, `filter_by_index`, `skip`,
//!   `take`, `pair_with`, `accumulate`, `compact`
//! - **Combination**: `concat` (`+`), `product`, `flat_product`, `singletons`,
//!   `repeat`
//! - **Interleave**: `zigzag`, `zigzag_all`
//! - **Set algebra** (feature `set-algebra`): `uniq`, `union` (`&`),
//!   `difference` (`-`)
//!
//! # Examples
//!
//! ```rust
//! use lazars::sequence::LazySequence;
//!
//! let odd_squares = LazySequence::iterate(1_u64, |n| n + 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .take(4);
//!
//! assert_eq!(odd_squares.to_vec(), Ok(vec![1, 9, 25, 49]));
//! ```

mod combination;
mod elementary;
mod interleave;
#[cfg(feature = "set-algebra")]
mod set_algebra;
