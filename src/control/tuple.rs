//! Named product types: `Pair` and `Triplet`.
//!
//! These are the element types produced by `zip`/`zip3` and consumed by
//! `unzip`/`unzip3`, and the result type of the combinators that return two
//! things at once (`partition`, `take_and_yield`, `fold_and_choose`).
//! They convert to and from plain tuples, so destructuring stays cheap:
//!
//! ```rust
//! use functional_utils::control::Pair;
//!
//! let pair = Pair::new(1, "one");
//! let (number, word) = pair.into_tuple();
//! assert_eq!((number, word), (1, "one"));
//! assert_eq!(Pair::from((2, "two")).second, "two");
//! ```

use std::fmt;

/// An immutable two-element record with structural equality and hashing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Converts into a `(first, second)` tuple.
    #[inline]
    #[must_use]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Returns a pair with the components swapped.
    #[inline]
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Transforms the first component.
    #[inline]
    #[must_use]
    pub fn map_first<C, F: FnOnce(A) -> C>(self, function: F) -> Pair<C, B> {
        Pair::new(function(self.first), self.second)
    }

    /// Transforms the second component.
    #[inline]
    #[must_use]
    pub fn map_second<C, F: FnOnce(B) -> C>(self, function: F) -> Pair<A, C> {
        Pair::new(self.first, function(self.second))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

/// An immutable three-element record with structural equality and hashing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet<A, B, C> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
    /// The third component.
    pub third: C,
}

impl<A, B, C> Triplet<A, B, C> {
    /// Creates a new triplet.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Converts into a `(first, second, third)` tuple.
    #[inline]
    #[must_use]
    pub fn into_tuple(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for Triplet<A, B, C> {
    #[inline]
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}

impl<A, B, C> From<Triplet<A, B, C>> for (A, B, C) {
    #[inline]
    fn from(triplet: Triplet<A, B, C>) -> Self {
        triplet.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Triplet<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {}, {})", self.first, self.second, self.third)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn pairs_with_equal_parts_are_equal_and_hash_alike() {
        let mut seen = HashSet::new();
        seen.insert(Pair::new("a", 1));
        assert!(seen.contains(&Pair::new("a", 1)));
        assert!(!seen.contains(&Pair::new("a", 2)));
    }

    #[rstest]
    fn swap_exchanges_components() {
        assert_eq!(Pair::new(1, 'x').swap(), Pair::new('x', 1));
    }

    #[rstest]
    fn conversions_are_usable_in_constants() {
        const SWAPPED: Pair<char, u8> = Pair::new(3, 'z').swap();
        const PARTS: (u8, char, bool) = Triplet::new(1, 'a', false).into_tuple();
        assert_eq!(SWAPPED.into_tuple(), ('z', 3));
        assert_eq!(PARTS, (1, 'a', false));
    }

    #[rstest]
    fn map_components() {
        let pair = Pair::new(2, "ab").map_first(|n| n * 10).map_second(str::len);
        assert_eq!(pair, Pair::new(20, 2));
    }

    #[rstest]
    fn triplet_tuple_conversion() {
        let triplet: Triplet<i32, char, bool> = (1, 'b', true).into();
        assert_eq!(triplet.second, 'b');
        assert_eq!(<(i32, char, bool)>::from(triplet), (1, 'b', true));
    }

    #[rstest]
    fn display_formats_as_tuple() {
        assert_eq!(Pair::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Triplet::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
