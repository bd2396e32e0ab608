//! Structural operators over nested sequences.
//!
//! A sequence whose elements may themselves be sequences is a
//! `LazySequence<Nested<T>>`. The operators here descend into nested
//! sequences up to a [`Depth`]:
//!
//! - `flatten`, `flatten_map`, `leaves`: splice nested sequences into their
//!   parent
//! - `structural_map`, `map_leaves`: transform elements while keeping the
//!   nesting
//! - `materialize`: drive everything into a [`Tree`]
//!
//! Nested input is most easily written with the [`tree!`](crate::tree)
//! macro and [`Tree::into_sequence`].
//!
//! # Examples
//!
//! ```rust
//! use lazars::tree;
//!
//! let nested = tree![1, [2, [3]]].into_sequence();
//! let squares = nested.map_leaves(|n: i32| n * n);
//!
//! assert_eq!(squares.leaves().to_vec(), Ok(vec![1, 4, 9]));
//! assert_eq!(squares.materialize(), Ok(tree![1, [4, [9]]]));
//! ```

mod depth;
mod flatten;
mod mapping;
mod nested;

pub use depth::Depth;
pub use nested::{Nested, Tree};
