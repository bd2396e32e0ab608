//! Finiteness hints for lazy sequences.

/// What is known, at construction time, about how many elements a sequence
/// will produce.
///
/// The hint is propagated through every combinator. It never affects the
/// elements that are produced; it only lets operations that must exhaust an
/// operand (set difference, the combinatorial generators) refuse one that is
/// known to be infinite instead of looping forever.
///
/// # Examples
///
/// ```rust
/// use lazars::sequence::{Extent, LazySequence};
///
/// let naturals = LazySequence::iterate(0_u64, |n| n + 1);
/// assert_eq!(naturals.extent(), Extent::Infinite);
///
/// let bounded = naturals.take(10);
/// assert_eq!(bounded.extent(), Extent::Finite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extent {
    /// The sequence is known to terminate.
    Finite,
    /// The sequence is known never to terminate.
    Infinite,
    /// Nothing is known about termination.
    #[default]
    Unknown,
}

impl Extent {
    /// Derives the extent from an iterator's size hint.
    ///
    /// An upper bound proves the iterator is finite; the absence of one proves
    /// nothing.
    #[inline]
    pub fn from_size_hint(size_hint: (usize, Option<usize>)) -> Self {
        match size_hint {
            (_, Some(_)) => Self::Finite,
            (usize::MAX, None) => Self::Infinite,
            (_, None) => Self::Unknown,
        }
    }

    /// The extent of a sequence that exhausts `self` and then `other`, or
    /// otherwise drives both to completion.
    #[inline]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Infinite, _) | (_, Self::Infinite) => Self::Infinite,
            (Self::Finite, Self::Finite) => Self::Finite,
            _ => Self::Unknown,
        }
    }

    /// The extent of a sequence that restarts `inner` once per element of
    /// `self`, as a cartesian product does.
    ///
    /// An infinite `inner` is only reached if `self` has an element, so it
    /// makes the result `Unknown` rather than `Infinite`.
    #[inline]
    pub const fn nest(self, inner: Self) -> Self {
        match (self, inner) {
            (Self::Infinite, _) => Self::Infinite,
            (Self::Finite, Self::Finite) => Self::Finite,
            _ => Self::Unknown,
        }
    }

    /// The extent after dropping some of the elements: an infinite sequence
    /// filtered by an arbitrary predicate may stop producing.
    #[inline]
    pub const fn weaken(self) -> Self {
        match self {
            Self::Finite => Self::Finite,
            Self::Infinite | Self::Unknown => Self::Unknown,
        }
    }

    /// Returns `true` if the sequence is known to terminate.
    #[inline]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite)
    }

    /// Returns `true` if the sequence is known never to terminate.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}
