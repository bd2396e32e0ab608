//! Error types for lazy sequences.
//!
//! Two kinds of failure exist in the combinator engine:
//!
//! - [`InvalidArgumentError`]: a size parameter (to `skip`, `repeat`, or a
//!   combinatorial generator) is negative or does not fit in a `usize`.
//!   It is reported when the combinator is applied, before any laziness is
//!   introduced.
//! - [`IllegalStateError`]: a sequence was driven in a way its sources do not
//!   support. It is reported at the first pull that needs the missing
//!   capability, never at construction time.
//!
//! Exhaustion is not an error: a traversal signals it by returning `None`.

use std::fmt;

/// A size parameter was rejected when a combinator was applied.
///
/// # Examples
///
/// ```rust
/// use lazars::sequence::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "repeat",
///     argument: "-1".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "repeat: expected a non-negative size, got -1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the combinator that rejected the argument.
    pub operation: &'static str,
    /// The rejected argument, as it was displayed by the caller's type.
    pub argument: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: expected a non-negative size, got {}",
            self.operation, self.argument
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// A sequence was driven in a way its sources cannot support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalStateError {
    /// A single-pass source was traversed a second time.
    AlreadyTraversed,
    /// An operand known to be infinite was given to an operation that needs
    /// to exhaust it.
    UnboundedSource {
        /// The name of the operation that required a finite operand.
        operation: &'static str,
    },
    /// A coroutine production rule suspended without emitting an element.
    SuspendedWithoutEmission,
}

impl fmt::Display for IllegalStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyTraversed => write!(
                formatter,
                "single-pass sequence already traversed. Build it from a restartable source to traverse it again."
            ),
            Self::UnboundedSource { operation } => write!(
                formatter,
                "{operation}: operand is infinite but must be exhausted"
            ),
            Self::SuspendedWithoutEmission => write!(
                formatter,
                "production rule suspended without emitting an element"
            ),
        }
    }
}

impl std::error::Error for IllegalStateError {}

/// Unified error type for every failure a lazy sequence can report.
///
/// # Examples
///
/// ```rust
/// use lazars::sequence::{IllegalStateError, LazySequence, SequenceError};
///
/// let single_pass = LazySequence::once(vec![1, 2, 3].into_iter());
/// assert_eq!(single_pass.to_vec(), Ok(vec![1, 2, 3]));
/// assert_eq!(
///     single_pass.to_vec(),
///     Err(SequenceError::IllegalState(IllegalStateError::AlreadyTraversed))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A size parameter was negative or unrepresentable.
    InvalidArgument(InvalidArgumentError),
    /// A source lacked a capability the traversal required.
    IllegalState(IllegalStateError),
}

impl SequenceError {
    /// Returns `true` if this is an [`SequenceError::InvalidArgument`].
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an [`SequenceError::IllegalState`].
    #[inline]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::IllegalState(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::IllegalState(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SequenceError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<IllegalStateError> for SequenceError {
    fn from(error: IllegalStateError) -> Self {
        Self::IllegalState(error)
    }
}

// =============================================================================
// Size Arguments
// =============================================================================

/// Any integer that can be offered as a size parameter.
///
/// Signed integers are accepted so that a negative size is reported as an
/// [`InvalidArgumentError`] instead of being unrepresentable.
pub trait SizeArgument: TryInto<usize> + Copy + fmt::Display {}

impl<N> SizeArgument for N where N: TryInto<usize> + Copy + fmt::Display {}

/// Converts a size parameter, failing with `InvalidArgument` when it is
/// negative or does not fit in a `usize`.
pub(crate) fn checked_size<N: SizeArgument>(
    operation: &'static str,
    size: N,
) -> Result<usize, SequenceError> {
    size.try_into().map_err(|_| {
        SequenceError::InvalidArgument(InvalidArgumentError {
            operation,
            argument: size.to_string(),
        })
    })
}
