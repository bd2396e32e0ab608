//! Flattening nested sequences.

use crate::sequence::{LazySequence, Step, Traversal};

use super::{Depth, Nested};

impl<T: 'static> LazySequence<Nested<T>> {
    /// Splices nested sequences into their parent, at most `depth` levels
    /// deep.
    ///
    /// A depth of `Levels(0)` returns the sequence unchanged. Leaves are never
    /// descended into, so strings and other non-sequence values stay whole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::structural::{Depth, Tree};
    /// use lazars::tree;
    ///
    /// let nested = tree![[1, 2], 3, [[4]]].into_sequence();
    ///
    /// assert_eq!(nested.flatten(Depth::Levels(1)).materialize(), Ok(tree![1, 2, 3, [4]]));
    /// assert_eq!(nested.flatten(Depth::Unbounded).materialize(), Ok(tree![1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn flatten(&self, depth: impl Into<Depth>) -> Self {
        let depth = depth.into();
        if depth.is_exhausted() {
            return self.clone();
        }
        let source = self.clone();
        let inner = depth.descend();
        Self::with_rule(self.extent().weaken(), move || {
            Traversal::from_steps(source.traverse().flat_map(move |step| splice(step, inner)))
        })
    }

    /// Applies `pre_transform` to every top-level element, then flattens.
    #[must_use]
    pub fn flatten_map<F>(&self, depth: impl Into<Depth>, pre_transform: F) -> Self
    where
        F: Fn(Nested<T>) -> Nested<T> + 'static,
    {
        self.map(pre_transform).flatten(depth)
    }

    /// Every leaf value, in depth-first order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::tree;
    ///
    /// let nested = tree![1, [2, [3, []]], 4].into_sequence();
    /// assert_eq!(nested.leaves().to_vec(), Ok(vec![1, 2, 3, 4]));
    /// ```
    pub fn leaves(&self) -> LazySequence<T> {
        self.flatten(Depth::Unbounded).filter_map(Nested::into_leaf)
    }
}

fn splice<T: 'static>(step: Step<Nested<T>>, depth: Depth) -> Traversal<Nested<T>> {
    match step {
        Ok(Nested::Branch(inner)) => inner.flatten(depth).traverse(),
        Ok(leaf) => Traversal::from_steps(std::iter::once(Ok(leaf))),
        Err(error) => Traversal::failed(error),
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{IllegalStateError, LazySequence, SequenceError};
    use crate::structural::{Depth, Nested, Tree};
    use crate::tree;
    use rstest::rstest;

    fn sample() -> LazySequence<Nested<i32>> {
        tree![[1, 2], 3, [[4]]].into_sequence()
    }

    #[rstest]
    #[case(Depth::Levels(0), tree![[1, 2], 3, [[4]]])]
    #[case(Depth::Levels(1), tree![1, 2, 3, [4]])]
    #[case(Depth::Levels(2), tree![1, 2, 3, 4])]
    #[case(Depth::Levels(3), tree![1, 2, 3, 4])]
    #[case(Depth::Unbounded, tree![1, 2, 3, 4])]
    fn test_flatten_by_depth(#[case] depth: Depth, #[case] expected: Tree<i32>) {
        assert_eq!(sample().flatten(depth).materialize(), Ok(expected));
    }

    #[rstest]
    fn test_flatten_keeps_string_leaves_whole() {
        let words: Tree<&str> = tree!["ab", ["cd"]];
        assert_eq!(
            words.into_sequence().leaves().to_vec(),
            Ok(vec!["ab", "cd"])
        );
    }

    #[rstest]
    fn test_flatten_map_applies_before_flattening() {
        let wrapped = sample().flatten_map(Depth::Levels(1), |element| match element {
            leaf @ Nested::Leaf(_) => Nested::Branch(LazySequence::of([leaf.clone(), leaf])),
            branch => branch,
        });
        assert_eq!(wrapped.materialize(), Ok(tree![1, 2, 3, 3, [4]]));
    }

    #[rstest]
    fn test_flatten_surfaces_nested_failure() {
        let broken: LazySequence<Nested<i32>> =
            LazySequence::of([Nested::Leaf(1), Nested::Branch(LazySequence::once(std::iter::empty()))]);
        let flat = broken.flatten(Depth::Unbounded);
        assert_eq!(flat.count(), Ok(1));
        assert_eq!(
            flat.count(),
            Err(SequenceError::IllegalState(IllegalStateError::AlreadyTraversed))
        );
    }
}
