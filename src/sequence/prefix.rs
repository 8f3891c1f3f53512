//! Prefixes and suffixes.
//!
//! [`take`] and [`take_and_yield`] work on any sequence. [`skip`],
//! [`take_while`] and [`skip_while`] need random access and return
//! sub-slices of their input without copying.

use super::error::SequenceError;
use super::stream::{self, Source};
use crate::control::Pair;

/// Returns the first `count` elements.
///
/// Exactly `count` elements are pulled; the rest of the sequence is never
/// touched.
///
/// # Errors
///
/// Returns [`SequenceError::InsufficientElements`] if the sequence holds
/// fewer than `count` elements.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::take;
///
/// assert_eq!(take(2, 1..), Ok(vec![1, 2]));
/// assert_eq!(take(0, Vec::<i32>::new()), Ok(vec![]));
/// ```
pub fn take<T, I>(count: usize, sequence: I) -> Result<Vec<T>, SequenceError>
where
    I: IntoIterator<Item = T>,
{
    let taken: Vec<T> = sequence.into_iter().take(count).collect();
    if taken.len() < count {
        return Err(SequenceError::InsufficientElements {
            requested: count,
            available: taken.len(),
        });
    }
    Ok(taken)
}

/// Returns the slice without its first `count` elements; empty when `count`
/// is at least the length.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::skip;
///
/// assert_eq!(skip(1, &[1, 2, 3]), &[2, 3]);
/// assert!(skip(5, &[1, 2, 3]).is_empty());
/// ```
#[inline]
#[must_use]
pub fn skip<T>(count: usize, slice: &[T]) -> &[T] {
    slice.get(count..).unwrap_or_default()
}

fn first_rejected<T, P>(mut predicate: P, slice: &[T]) -> usize
where
    P: FnMut(&T) -> bool,
{
    slice
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(slice.len())
}

/// Returns the longest prefix whose elements are all accepted by `predicate`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::take_while;
///
/// assert_eq!(take_while(|n: &i32| *n < 3, &[1, 2, 3, 1]), &[1, 2]);
/// ```
#[must_use]
pub fn take_while<T, P>(predicate: P, slice: &[T]) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    &slice[..first_rejected(predicate, slice)]
}

/// Returns the slice from the first element rejected by `predicate` onwards.
///
/// Elements after that point are returned verbatim, without being checked.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::skip_while;
///
/// assert_eq!(skip_while(|n: &i32| *n < 3, &[1, 2, 3, 1]), &[3, 1]);
/// ```
#[must_use]
pub fn skip_while<T, P>(predicate: P, slice: &[T]) -> &[T]
where
    P: FnMut(&T) -> bool,
{
    &slice[first_rejected(predicate, slice)..]
}

/// Splits off the first `count` elements and returns them together with a
/// stream over the rest.
///
/// The remainder continues from the same cursor: no element is repeated or
/// skipped. When the sequence is shorter than `count`, the prefix is all of
/// it and the remainder is empty.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::take_and_yield;
///
/// let split = take_and_yield(1..=5, 2);
/// assert_eq!(split.first, vec![1, 2]);
/// assert_eq!(split.second.collect::<Vec<_>>(), vec![3, 4, 5]);
/// ```
#[must_use]
pub fn take_and_yield<I>(sequence: I, count: usize) -> Pair<Vec<I::Item>, Source<I::IntoIter>>
where
    I: IntoIterator,
{
    let mut rest = stream::from(sequence);
    let prefix = rest.by_ref().take(count).collect();
    Pair::new(prefix, rest)
}
