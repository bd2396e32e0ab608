//! Round-robin interleaving of several sequences.

use crate::sequence::{Extent, LazySequence, Step, Traversal};

/// Round-robin over the sources that are still producing.
///
/// An exhausted source is removed from the rotation and the current round
/// continues with the source that followed it; the others keep their
/// relative order.
struct Zigzag<T> {
    active: Vec<Traversal<T>>,
    cursor: usize,
}

impl<T> Iterator for Zigzag<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.active.is_empty() {
            if self.cursor >= self.active.len() {
                self.cursor = 0;
            }
            match self.active[self.cursor].next() {
                Some(Ok(value)) => {
                    self.cursor += 1;
                    return Some(Ok(value));
                }
                Some(Err(error)) => {
                    self.active.clear();
                    return Some(Err(error));
                }
                None => {
                    self.active.remove(self.cursor);
                    tracing::trace!(remaining = self.active.len(), "zigzag source exhausted");
                }
            }
        }
        None
    }
}

impl<T: 'static> LazySequence<T> {
    /// Alternates between the elements of `self` and `other`; once either is
    /// exhausted, the remainder of the other follows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let numbers = LazySequence::of(["1", "2", "3", "4"]);
    /// let letters = LazySequence::of(["a", "b"]);
    /// assert_eq!(
    ///     numbers.zigzag(&letters).to_vec(),
    ///     Ok(vec!["1", "a", "2", "b", "3", "4"])
    /// );
    /// ```
    #[must_use]
    pub fn zigzag(&self, other: &Self) -> Self {
        Self::zigzag_all([self.clone(), other.clone()])
    }

    /// Interleaves any number of sequences round-robin, dropping each one from
    /// the rotation as it is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::sequence::LazySequence;
    ///
    /// let merged = LazySequence::zigzag_all([
    ///     LazySequence::of([1, 2, 3, 4]),
    ///     LazySequence::of([1, 2, 3]),
    ///     LazySequence::of([1, 2]),
    /// ]);
    /// assert_eq!(merged.to_vec(), Ok(vec![1, 1, 1, 2, 2, 2, 3, 3, 4]));
    /// ```
    pub fn zigzag_all(sources: impl IntoIterator<Item = Self>) -> Self {
        let sources: Vec<Self> = sources.into_iter().collect();
        let extent = sources
            .iter()
            .map(Self::extent)
            .fold(Extent::Finite, Extent::combine);
        Self::with_rule(extent, move || {
            Traversal::from_steps(Zigzag {
                active: sources.iter().map(Self::traverse).collect(),
                cursor: 0,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{Extent, LazySequence};
    use rstest::rstest;

    #[rstest]
    fn test_zigzag_of_nothing_is_empty() {
        let merged = LazySequence::<i32>::zigzag_all([]);
        assert_eq!(merged.extent(), Extent::Finite);
        assert_eq!(merged.to_vec(), Ok(vec![]));
    }

    #[rstest]
    fn test_zigzag_with_infinite_source() {
        let ones = LazySequence::constant(1);
        let merged = LazySequence::of([7, 8]).zigzag(&ones);
        assert_eq!(merged.extent(), Extent::Infinite);
        assert_eq!(merged.take(6).to_vec(), Ok(vec![7, 1, 8, 1, 1, 1]));
    }
}
