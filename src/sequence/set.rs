//! Set-valued counterparts of the sequence combinators.
//!
//! Every function returns a fresh [`HashSet`] built with [`GroupHasher`];
//! the inputs are never modified. Duplicates collapse, and the iteration
//! order of the result is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::sequence::{set, to_set};
//!
//! let small = to_set([1, 2, 3, 4]);
//! let even = set::filter(|n: &i32| n % 2 == 0, 1..=6);
//!
//! let both = set::intersection(&small, &even);
//! assert_eq!(both, to_set([2, 4]));
//!
//! let only_small = set::asymmetric_difference(&small, &even);
//! assert_eq!(only_small, to_set([1, 3]));
//! ```

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::group::GroupHasher;

/// Keeps the distinct elements for which `predicate` holds.
#[must_use]
pub fn filter<T, P, I>(mut predicate: P, sequence: I) -> HashSet<T, GroupHasher>
where
    T: Eq + Hash,
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Applies `function` to every element and keeps the distinct results.
///
/// The result can be smaller than the input when `function` maps several
/// elements to the same value.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::set;
///
/// let remainders = set::map(|n: i32| n % 3, 0..10);
/// assert_eq!(remainders.len(), 3);
/// ```
#[must_use]
pub fn map<T, U, F, I>(function: F, sequence: I) -> HashSet<U, GroupHasher>
where
    U: Eq + Hash,
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().map(function).collect()
}

/// Maps every element to a sequence and gathers the distinct elements of
/// all of them.
#[must_use]
pub fn collect<T, U, F, I>(function: F, sequence: I) -> HashSet<U::Item, GroupHasher>
where
    U: IntoIterator,
    U::Item: Eq + Hash,
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().flat_map(function).collect()
}

/// Union of two collections.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::{set, to_set};
///
/// assert_eq!(set::concat([1, 2], [2, 3]), to_set([1, 2, 3]));
/// ```
#[must_use]
pub fn concat<T, A, B>(first: A, second: B) -> HashSet<T, GroupHasher>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    first.into_iter().chain(second).collect()
}

/// Elements present in both sets.
///
/// The sets may use different hashers.
#[must_use]
pub fn intersection<T, S1, S2>(first: &HashSet<T, S1>, second: &HashSet<T, S2>) -> HashSet<T, GroupHasher>
where
    T: Eq + Hash + Clone,
    S1: BuildHasher,
    S2: BuildHasher,
{
    first
        .iter()
        .filter(|element| second.contains(*element))
        .cloned()
        .collect()
}

/// Elements of `included` that are not in `excluded`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::{set, to_set};
///
/// let remaining = set::asymmetric_difference(&to_set(1..=5), &to_set([2, 4, 6]));
/// assert_eq!(remaining, to_set([1, 3, 5]));
/// ```
#[must_use]
pub fn asymmetric_difference<T, S1, S2>(
    included: &HashSet<T, S1>,
    excluded: &HashSet<T, S2>,
) -> HashSet<T, GroupHasher>
where
    T: Eq + Hash + Clone,
    S1: BuildHasher,
    S2: BuildHasher,
{
    included
        .iter()
        .filter(|element| !excluded.contains(*element))
        .cloned()
        .collect()
}
