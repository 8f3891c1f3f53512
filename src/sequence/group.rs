//! Keyed collections built from sequences.
//!
//! The maps and sets returned here use [`GroupHasher`], which is selected at compile
//! time: `fxhash` picks `rustc_hash`, `ahash` picks `ahash`, and without
//! either feature the standard library's `RandomState` is used.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The `BuildHasher` used by the maps and sets built in this module and in
/// [`set`](super::set).
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by the maps and sets built in this module and in
/// [`set`](super::set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// The `BuildHasher` used by the maps and sets built in this module and in
/// [`set`](super::set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

/// Groups elements by the key `key_function` assigns them.
///
/// Within each group, elements keep the order in which they appeared. The
/// order of the keys themselves is unspecified.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::group_by;
///
/// let by_parity = group_by(|n: &i32| n % 2 == 0, [1, 2, 3, 4, 5]);
/// assert_eq!(by_parity[&true], vec![2, 4]);
/// assert_eq!(by_parity[&false], vec![1, 3, 5]);
/// ```
#[must_use]
pub fn group_by<T, K, F, I>(mut key_function: F, sequence: I) -> HashMap<K, Vec<T>, GroupHasher>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    I: IntoIterator<Item = T>,
{
    let mut groups: HashMap<K, Vec<T>, GroupHasher> = HashMap::with_hasher(GroupHasher::default());
    for element in sequence {
        groups.entry(key_function(&element)).or_default().push(element);
    }
    groups
}

/// Builds a map from a key and a value derived from each element.
///
/// When several elements share a key, the last one wins.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::to_map;
///
/// let lengths = to_map(|word: &&str| word.chars().next(), |word: &str| word.len(), ["apple", "banana", "avocado"]);
/// assert_eq!(lengths[&Some('a')], 7);
/// assert_eq!(lengths[&Some('b')], 6);
/// ```
#[must_use]
pub fn to_map<T, K, V, FK, FV, I>(
    mut key_function: FK,
    mut value_function: FV,
    sequence: I,
) -> HashMap<K, V, GroupHasher>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FV: FnMut(T) -> V,
    I: IntoIterator<Item = T>,
{
    let iterator = sequence.into_iter();
    let mut map = HashMap::with_capacity_and_hasher(iterator.size_hint().0, GroupHasher::default());
    for element in iterator {
        map.insert(key_function(&element), value_function(element));
    }
    map
}

/// Builds a map from the key/value pair `function` derives from each element.
///
/// When several elements produce the same key, the last one wins.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::map_dict;
///
/// let squares = map_dict(|n: i32| (n, n * n), 1..=3);
/// assert_eq!(squares[&3], 9);
/// ```
#[must_use]
pub fn map_dict<T, K, V, F, I>(function: F, sequence: I) -> HashMap<K, V, GroupHasher>
where
    K: Eq + Hash,
    F: FnMut(T) -> (K, V),
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().map(function).collect()
}

/// Collects the distinct elements of `sequence`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::to_set;
///
/// let letters = to_set("hello".chars());
/// assert_eq!(letters.len(), 4);
/// assert!(letters.contains(&'l'));
/// ```
#[must_use]
pub fn to_set<T, I>(sequence: I) -> HashSet<T, GroupHasher>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().collect()
}
