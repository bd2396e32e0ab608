//! The lazy sequence primitive and its protocol.
//!
//! - [`LazySequence`]: a restartable production rule; every combinator
//!   returns one
//! - [`Traversal`]: one pull-based pass over a sequence (`next()`)
//! - [`Step`]: the result of a pull
//! - [`SequenceError`]: what a pull or a combinator application can fail with
//! - [`Extent`]: what is known about a sequence's finiteness
//! - [`Arrangement`]: the fixed-size tuple type used by products and
//!   combinatorial generators
//!
//! With the `generator` feature, [`LazySequence::generate`] additionally
//! accepts production rules written as `async` blocks (see [`Emitter`]).
//!
//! # Examples
//!
//! ```rust
//! use lazars::sequence::LazySequence;
//!
//! let words = LazySequence::of(["lazy", "sequence"]);
//! let lengths = words.map(str::len);
//!
//! // Nothing has been computed yet; driving the sequence does the work.
//! assert_eq!(lengths.to_vec(), Ok(vec![4, 8]));
//! ```

mod arrangement;
mod error;
mod extent;
#[cfg(feature = "generator")]
mod generator;
mod lazy_sequence;
mod traversal;

pub use arrangement::{ARRANGEMENT_INLINE_CAPACITY, Arrangement};
pub(crate) use arrangement::{prefixed, spliced};
pub(crate) use error::checked_size;
pub use error::{IllegalStateError, InvalidArgumentError, SequenceError, SizeArgument};
pub use extent::Extent;
#[cfg(feature = "generator")]
pub use generator::{Emission, Emitter};
pub use lazy_sequence::LazySequence;
pub use traversal::{Step, Traversal};
