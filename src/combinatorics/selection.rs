//! Selection policies for the combinatorial generators.

use std::fmt;

use crate::sequence::LazySequence;

/// How a combinatorial generator draws `n` elements from its source.
///
/// | Selection             | Order matters | Repeats | Count for `k` elements |
/// |-----------------------|---------------|---------|------------------------|
/// | `RepeatedPermutation` | yes           | yes     | `k^n`                  |
/// | `Permutation`         | yes           | no      | `k! / (k - n)!`        |
/// | `Combination`         | no            | no      | `C(k, n)`              |
/// | `RepeatedCombination` | no            | yes     | `C(k + n - 1, n)`      |
///
/// "Order does not matter" means the chosen elements always appear in source
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Every position may hold any element of the source.
    RepeatedPermutation,
    /// Every source position is used at most once, in any order.
    Permutation,
    /// Every source position is used at most once, in source order.
    Combination,
    /// Source positions may repeat but never go backwards.
    RepeatedCombination,
}

impl Selection {
    /// The name of the generator implementing this selection, as it appears in
    /// error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RepeatedPermutation => "repeated_permutation",
            Self::Permutation => "permutation",
            Self::Combination => "combination",
            Self::RepeatedCombination => "repeated_combination",
        }
    }

    /// The number of arrangements of `size` elements drawn from `length`
    /// source elements, or `None` if it overflows a `u128`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazars::combinatorics::Selection;
    ///
    /// assert_eq!(Selection::Combination.cardinality(4, 2), Some(6));
    /// assert_eq!(Selection::Permutation.cardinality(4, 2), Some(12));
    /// assert_eq!(Selection::Permutation.cardinality(4, 5), Some(0));
    /// assert_eq!(Selection::RepeatedCombination.cardinality(4, 2), Some(10));
    /// assert_eq!(Selection::RepeatedPermutation.cardinality(3, 2), Some(9));
    /// ```
    pub fn cardinality(self, length: usize, size: usize) -> Option<u128> {
        let length = length as u128;
        let size_wide = size as u128;
        match self {
            Self::RepeatedPermutation => length.checked_pow(u32::try_from(size).ok()?),
            Self::Permutation => {
                if size_wide > length {
                    return Some(0);
                }
                (length - size_wide + 1..=length).try_fold(1_u128, u128::checked_mul)
            }
            Self::Combination => binomial(length, size_wide),
            Self::RepeatedCombination => {
                if length == 0 {
                    return Some(u128::from(size == 0));
                }
                binomial(length + size_wide - 1, size_wide)
            }
        }
    }

    /// The source an element chosen at `index` leaves for the remaining
    /// positions.
    pub(crate) fn remainder<T: 'static>(
        self,
        source: &LazySequence<T>,
        index: usize,
    ) -> LazySequence<T> {
        match self {
            Self::RepeatedPermutation => source.clone(),
            Self::Permutation => source
                .filter_by_index(move |position| position != index)
                .with_extent(source.extent()),
            Self::Combination => source.skip_unchecked(index + 1),
            Self::RepeatedCombination => source.skip_unchecked(index),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// `C(n, k)` with overflow checking.
fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1_u128, |accumulator, step| {
        accumulator
            .checked_mul(n - step)
            .map(|product| product / (step + 1))
    })
}
