//! Element-wise transforms and folds.
//!
//! `map` and `filter` are written in terms of [`fold`]: the fold threads a
//! `Vec` accumulator through the sequence and each step pushes what it keeps.

use std::cmp::Ordering;
use std::fmt::{Display, Write};

use crate::control::{Maybe, Pair};

/// Strict left fold: `function(... function(function(seed, x0), x1) ..., xn)`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::fold;
///
/// assert_eq!(fold(|total, n| total + n, 0, [1, 2, 3, 4, 5]), 15);
/// assert_eq!(fold(|text: String, c| text + c, String::new(), ["a", "b"]), "ab");
/// ```
#[inline]
#[must_use]
pub fn fold<A, T, F, I>(function: F, seed: A, sequence: I) -> A
where
    F: FnMut(A, T) -> A,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().fold(seed, function)
}

/// Applies `function` to every element, preserving order and length.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::map;
///
/// assert_eq!(map(|n: i32| n * n, [1, 2, 3]), vec![1, 4, 9]);
/// ```
#[must_use]
pub fn map<T, U, F, I>(mut function: F, sequence: I) -> Vec<U>
where
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    let iterator = sequence.into_iter();
    let seed = Vec::with_capacity(iterator.size_hint().0);
    fold(
        |mut mapped: Vec<U>, element| {
            mapped.push(function(element));
            mapped
        },
        seed,
        iterator,
    )
}

/// Like [`map`], also passing the zero-based index of each element.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::mapi;
///
/// assert_eq!(mapi(|index, c: char| format!("{index}{c}"), ['a', 'b']), vec!["0a", "1b"]);
/// ```
#[must_use]
pub fn mapi<T, U, F, I>(mut function: F, sequence: I) -> Vec<U>
where
    F: FnMut(usize, T) -> U,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Keeps the elements accepted by `predicate`, in their original order.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::filter;
///
/// assert_eq!(filter(|word: &&str| word.len() > 2, ["a", "abc", "de", "fgh"]), vec!["abc", "fgh"]);
/// ```
#[must_use]
pub fn filter<T, P, I>(mut predicate: P, sequence: I) -> Vec<T>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    fold(
        |mut kept: Vec<T>, element| {
            if predicate(&element) {
                kept.push(element);
            }
            kept
        },
        Vec::new(),
        sequence,
    )
}

/// Applies `function` to every element and keeps the `Just` results,
/// unwrapped and in order.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Maybe;
/// use functional_utils::sequence::choose;
///
/// let parsed = choose(|text: &str| Maybe::from(text.parse::<u8>().ok()), ["1", "x", "3"]);
/// assert_eq!(parsed, vec![1, 3]);
/// ```
#[must_use]
pub fn choose<T, U, F, I>(mut function: F, sequence: I) -> Vec<U>
where
    F: FnMut(T) -> Maybe<U>,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .filter_map(|element| function(element).into_option())
        .collect()
}

/// Maps each element to a sequence and concatenates the results.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::collect;
///
/// assert_eq!(collect(|n: usize| vec![n; n], [1, 0, 2]), vec![1, 2, 2]);
/// ```
#[must_use]
pub fn collect<T, U, F, I>(function: F, sequence: I) -> Vec<U::Item>
where
    U: IntoIterator,
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().flat_map(function).collect()
}

/// Splits the sequence into the elements accepted by `predicate` and the
/// rest; relative order is kept on both sides.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::partition;
///
/// let split = partition(|n: &i32| *n > 2, [1, 3, 2, 4]);
/// assert_eq!(split.first, vec![3, 4]);
/// assert_eq!(split.second, vec![1, 2]);
/// ```
#[must_use]
pub fn partition<T, P, I>(mut predicate: P, sequence: I) -> Pair<Vec<T>, Vec<T>>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    let (matching, rest) = sequence.into_iter().partition(|element| predicate(element));
    Pair::new(matching, rest)
}

/// Folds with an accumulator while optionally emitting one element per step.
///
/// `function(accumulator, element)` returns the next accumulator and a
/// `Maybe` of something to emit. The result pairs the final accumulator with
/// everything emitted, in order.
///
/// # Examples
///
/// Running totals, emitted only when they cross a multiple of ten:
///
/// ```rust
/// use functional_utils::control::Maybe;
/// use functional_utils::sequence::fold_and_choose;
///
/// let result = fold_and_choose(
///     |total: i32, n: i32| {
///         let next = total + n;
///         let crossed = next / 10 > total / 10;
///         (next, if crossed { Maybe::some(next) } else { Maybe::none() })
///     },
///     0,
///     [4, 5, 3, 9, 1],
/// );
/// assert_eq!(result.first, 22);
/// assert_eq!(result.second, vec![12, 21]);
/// ```
#[must_use]
pub fn fold_and_choose<A, T, B, F, I>(mut function: F, seed: A, sequence: I) -> Pair<A, Vec<B>>
where
    F: FnMut(A, T) -> (A, Maybe<B>),
    I: IntoIterator<Item = T>,
{
    let mut emitted = Vec::new();
    let accumulator = fold(
        |accumulator, element| {
            let (next, emission) = function(accumulator, element);
            emitted.extend(emission);
            next
        },
        seed,
        sequence,
    );
    Pair::new(accumulator, emitted)
}

/// Collects the sequence and sorts it stably with `compare`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::sort_with;
///
/// let by_length = sort_with(|a: &&str, b: &&str| a.len().cmp(&b.len()), ["ccc", "a", "bb", "d"]);
/// assert_eq!(by_length, vec!["a", "d", "bb", "ccc"]);
/// ```
#[must_use]
pub fn sort_with<T, F, I>(compare: F, sequence: I) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
    I: IntoIterator<Item = T>,
{
    let mut sorted: Vec<T> = sequence.into_iter().collect();
    sorted.sort_by(compare);
    sorted
}

/// Renders every element with `Display` and joins them with `separator`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::join;
///
/// assert_eq!(join(", ", [1, 2, 3]), "1, 2, 3");
/// assert_eq!(join(", ", Vec::<i32>::new()), "");
/// ```
#[must_use]
pub fn join<T, I>(separator: &str, sequence: I) -> String
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    let mut joined = String::new();
    for (index, element) in sequence.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        let _ = write!(joined, "{element}");
    }
    joined
}
