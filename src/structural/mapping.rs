//! Shape-preserving maps over nested sequences.

use std::rc::Rc;

use crate::sequence::LazySequence;

use super::{Depth, Nested};

impl<T: 'static> LazySequence<Nested<T>> {
    /// Replaces every element found at most `depth` levels down with
    /// `transform` of it, keeping the nesting above.
    ///
    /// Nested sequences are descended into while depth remains; once it runs
    /// out, a nested sequence is handed to `transform` as a whole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::structural::{Depth, Nested, Tree};
    /// use lazars::tree;
    ///
    /// let shape: Tree<Option<i32>> = tree![None, [None, [None]]];
    /// let marked = shape
    ///     .into_sequence()
    ///     .structural_map(Depth::Levels(0), |element| matches!(element, Nested::Leaf(None)));
    /// assert_eq!(marked.materialize(), Ok(tree![true, false]));
    /// ```
    pub fn structural_map<U, F>(
        &self,
        depth: impl Into<Depth>,
        transform: F,
    ) -> LazySequence<Nested<U>>
    where
        U: 'static,
        F: Fn(Nested<T>) -> U + 'static,
    {
        map_structure(self, depth.into(), Rc::new(transform))
    }

    /// Transforms every leaf value, keeping the nesting intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::tree;
    ///
    /// let parity = tree![1, 2, [3, 4, 5]].into_sequence().map_leaves(|n: i32| n % 2 == 0);
    /// assert_eq!(parity.materialize(), Ok(tree![false, true, [false, true, false]]));
    /// ```
    pub fn map_leaves<U, F>(&self, transform: F) -> LazySequence<Nested<U>>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map_leaf_structure(self, Rc::new(transform))
    }
}

fn map_structure<T: 'static, U: 'static>(
    source: &LazySequence<Nested<T>>,
    depth: Depth,
    transform: Rc<dyn Fn(Nested<T>) -> U>,
) -> LazySequence<Nested<U>> {
    source.map(move |element| match element {
        Nested::Branch(inner) if !depth.is_exhausted() => {
            Nested::Branch(map_structure(&inner, depth.descend(), Rc::clone(&transform)))
        }
        element => Nested::Leaf(transform(element)),
    })
}

fn map_leaf_structure<T: 'static, U: 'static>(
    source: &LazySequence<Nested<T>>,
    transform: Rc<dyn Fn(T) -> U>,
) -> LazySequence<Nested<U>> {
    source.map(move |element| match element {
        Nested::Leaf(value) => Nested::Leaf(transform(value)),
        Nested::Branch(inner) => Nested::Branch(map_leaf_structure(&inner, Rc::clone(&transform))),
    })
}
