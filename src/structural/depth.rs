//! How far structural operators descend.

/// The number of nesting levels a structural operator descends into.
///
/// The default is [`Depth::Unbounded`]: descend until no element is itself a
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Depth {
    /// Descend into every nested sequence, at any depth.
    #[default]
    Unbounded,
    /// Descend at most this many levels.
    Levels(usize),
}

impl Depth {
    /// Returns `true` if no further level may be descended into.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Levels(0))
    }

    /// The depth remaining one level further down.
    #[inline]
    #[must_use]
    pub const fn descend(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Levels(levels) => Self::Levels(levels.saturating_sub(1)),
        }
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Self::Levels(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Depth::Unbounded, Depth::Unbounded)]
    #[case(Depth::Levels(2), Depth::Levels(1))]
    #[case(Depth::Levels(0), Depth::Levels(0))]
    fn test_descend(#[case] depth: Depth, #[case] expected: Depth) {
        assert_eq!(depth.descend(), expected);
    }

    #[rstest]
    fn test_default_is_unbounded() {
        assert_eq!(Depth::default(), Depth::Unbounded);
        assert!(!Depth::default().is_exhausted());
        assert!(Depth::from(0).is_exhausted());
    }
}
