//! Elements that may themselves be sequences.

use crate::sequence::{LazySequence, SequenceError};

/// An element of a sequence that is either a plain value or another
/// sequence of the same kind.
///
/// Structural operators dispatch on [`Nested::is_sequence`]: branches are
/// descended into, leaves are not.
#[derive(Debug, Clone)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A nested sequence.
    Branch(LazySequence<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this element is itself a sequence.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// The nested sequence, if this element is one.
    #[inline]
    pub const fn as_sequence(&self) -> Option<&LazySequence<Self>> {
        match self {
            Self::Branch(sequence) => Some(sequence),
            Self::Leaf(_) => None,
        }
    }

    /// The plain value, if this element is one.
    #[inline]
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }
}

impl<T: 'static> Nested<T> {
    /// Drives this element and everything nested below it into a [`Tree`].
    pub fn into_tree(self) -> Result<Tree<T>, SequenceError> {
        match self {
            Self::Leaf(value) => Ok(Tree::Leaf(value)),
            Self::Branch(sequence) => sequence.materialize(),
        }
    }
}

impl<T> From<LazySequence<Nested<T>>> for Nested<T> {
    fn from(sequence: LazySequence<Nested<T>>) -> Self {
        Self::Branch(sequence)
    }
}

impl<T: 'static> LazySequence<Nested<T>> {
    /// Drives the sequence, and every sequence nested in it, into a
    /// [`Tree::Node`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::structural::Tree;
    /// use lazars::tree;
    ///
    /// let shape = tree![1, [2, 3]];
    /// assert_eq!(shape.clone().into_sequence().materialize(), Ok(shape));
    /// ```
    pub fn materialize(&self) -> Result<Tree<T>, SequenceError> {
        self.traverse()
            .map(|step| step.and_then(Nested::into_tree))
            .collect::<Result<Vec<_>, _>>()
            .map(Tree::Node)
    }
}

/// An eagerly materialized nested structure.
///
/// `Tree` is the value counterpart of [`Nested`]: it is what a nested lazy
/// sequence turns into once driven, and a convenient way to write one down
/// (see the [`tree!`](crate::tree) macro).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree<T> {
    /// A plain value.
    Leaf(T),
    /// A list of subtrees.
    Node(Vec<Tree<T>>),
}

impl<T: Clone + 'static> Tree<T> {
    /// Converts the tree into a lazy nested element. Children are produced
    /// from the tree on demand.
    pub fn into_nested(self) -> Nested<T> {
        match self {
            Self::Leaf(value) => Nested::Leaf(value),
            Self::Node(_) => Nested::Branch(self.into_sequence()),
        }
    }

    /// Converts the tree into a lazy sequence of its children. A leaf becomes
    /// a sequence of one element.
    pub fn into_sequence(self) -> LazySequence<Nested<T>> {
        match self {
            Self::Node(children) => LazySequence::from_vec(children).map(Self::into_nested),
            leaf @ Self::Leaf(_) => LazySequence::single(leaf).map(Self::into_nested),
        }
    }
}

/// Builds a [`Tree`] from a bracketed literal.
///
/// The outermost list becomes a [`Tree::Node`], nested brackets become
/// nested nodes and every other token becomes a [`Tree::Leaf`]. Leaves must be
/// single tokens; wrap anything longer, such as a negative number, in
/// parentheses.
///
/// # Examples
///
/// ```rust
/// use lazars::structural::Tree;
/// use lazars::tree;
///
/// let shape: Tree<i32> = tree![1, [2, (-3)], []];
/// assert_eq!(
///     shape,
///     Tree::Node(vec![
///         Tree::Leaf(1),
///         Tree::Node(vec![Tree::Leaf(2), Tree::Leaf(-3)]),
///         Tree::Node(vec![]),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! tree {
    (@element [ $($inner:tt),* $(,)? ]) => {
        $crate::structural::Tree::Node(vec![$($crate::tree!(@element $inner)),*])
    };
    (@element $value:expr) => {
        $crate::structural::Tree::Leaf($value)
    };
    ($($element:tt),* $(,)?) => {
        $crate::structural::Tree::Node(vec![$($crate::tree!(@element $element)),*])
    };
}
