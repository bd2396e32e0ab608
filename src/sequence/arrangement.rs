//! Fixed-size tuples produced by products and combinatorial generators.

use smallvec::SmallVec;

/// Number of elements an [`Arrangement`] stores inline before spilling to
/// the heap. Arrangements of up to this size never allocate.
pub const ARRANGEMENT_INLINE_CAPACITY: usize = 4;

/// A fixed-size tuple of elements drawn from one or more sequences.
///
/// Arrangements are what `flat_product` splices together and what the
/// combinatorial generators emit.
pub type Arrangement<T> = SmallVec<[T; ARRANGEMENT_INLINE_CAPACITY]>;

/// Builds the arrangement `[head, tail...]`.
pub(crate) fn prefixed<T>(head: T, tail: Arrangement<T>) -> Arrangement<T> {
    let mut arrangement = Arrangement::with_capacity(tail.len() + 1);
    arrangement.push(head);
    arrangement.extend(tail);
    arrangement
}

/// Builds the arrangement `[left..., right...]`.
pub(crate) fn spliced<T>(mut left: Arrangement<T>, right: Arrangement<T>) -> Arrangement<T> {
    left.extend(right);
    left
}
