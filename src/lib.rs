//! # lazars
//!
//! Lazy sequence combinators for Rust: restartable, pull-based sequences
//! and a toolkit of operators that compose them without computing anything
//! until a consumer asks.
//!
//! ## Overview
//!
//! A [`LazySequence`](sequence::LazySequence) is a production rule rather
//! than a collection. Every operator wraps its operands into a new rule and
//! returns another sequence, so chains of operators stay lazy and can be
//! traversed any number of times. Infinite sources are first-class.
//!
//! - **Sequences**: the primitive, its constructors and consumers, the
//!   traversal protocol and the error model
//! - **Combinators**: filtering, mapping, index gating, concatenation,
//!   cartesian products, repetition, round-robin interleaving and set algebra
//! - **Combinatorics**: lazy permutations, combinations and their repeated
//!   variants
//! - **Structural**: flattening and shape-preserving maps over nested
//!   sequences
//!
//! ## Feature Flags
//!
//! - `combinatorics`: Permutation and combination generators
//! - `structural`: Nested sequences, `flatten`, `structural_map`
//! - `set-algebra`: `uniq`, `union`, `difference`
//! - `generator`: Production rules written as `async` blocks
//! - `fxhash`: Use `rustc-hash` for set-algebra bookkeeping
//! - `ahash`: Use `ahash` for set-algebra bookkeeping
//! - `full`: Enable all operator families (default)
//!
//! ## Example
//!
//! ```rust
//! use lazars::prelude::*;
//!
//! let naturals = LazySequence::iterate(0_u64, |n| n + 1);
//! let odds = naturals.filter(|n| n % 2 == 1);
//! let evens = naturals.filter(|n| n % 2 == 0);
//!
//! let woven = odds.zigzag(&evens).take(6);
//! assert_eq!(woven.to_vec(), Ok(vec![1, 0, 3, 2, 5, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence primitive, its error types and the public types of
/// every enabled operator family.
///
/// # Usage
///
/// ```rust
/// use lazars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "combinatorics")]
    pub use crate::combinatorics::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "structural")]
    pub use crate::tree;
}

pub mod sequence;

pub mod combinator;

#[cfg(feature = "combinatorics")]
pub mod combinatorics;

#[cfg(feature = "structural")]
pub mod structural;
