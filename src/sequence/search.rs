//! Searching and quantifying over sequences.
//!
//! The searches return `Err(SequenceError::NotFound)` rather than an `Option`
//! so that a missing element propagates with `?` and still says which
//! operation came up empty.

use super::error::SequenceError;
use crate::control::Maybe;

/// Returns the first element accepted by `predicate`.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element is accepted.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::find;
///
/// assert_eq!(find(|n: &i32| *n > 2, [1, 3, 5]), Ok(3));
/// assert!(find(|n: &i32| *n > 9, [1, 3, 5]).is_err());
/// ```
pub fn find<T, P, I>(mut predicate: P, sequence: I) -> Result<T, SequenceError>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .find(|element| predicate(element))
        .ok_or(SequenceError::not_found("find"))
}

/// Returns the last element accepted by `predicate`, searching from the back.
///
/// Only the tail of the sequence up to the match is visited. Single-pass
/// sequences without a reverse view can use [`find_last_forward`].
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element is accepted.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::find_last;
///
/// assert_eq!(find_last(|n: &i32| *n > 2, vec![1, 3, 5, 2]), Ok(5));
/// ```
pub fn find_last<T, P, I>(mut predicate: P, sequence: I) -> Result<T, SequenceError>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
{
    sequence
        .into_iter()
        .rev()
        .find(|element| predicate(element))
        .ok_or(SequenceError::not_found("find_last"))
}

/// Returns the last element accepted by `predicate` with a single forward
/// pass, keeping the latest match seen.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element is accepted.
pub fn find_last_forward<T, P, I>(mut predicate: P, sequence: I) -> Result<T, SequenceError>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .last()
        .ok_or(SequenceError::not_found("find_last"))
}

/// Returns the zero-based position of the first element accepted by
/// `predicate`.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element is accepted.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::find_index;
///
/// assert_eq!(find_index(|c: &char| c.is_uppercase(), "abCd".chars()), Ok(2));
/// ```
pub fn find_index<T, P, I>(mut predicate: P, sequence: I) -> Result<usize, SequenceError>
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .position(|element| predicate(&element))
        .ok_or(SequenceError::not_found("find_index"))
}

/// Returns the first `Just` produced by `function`, unwrapped.
///
/// `function` is called at most once per element and never again for the
/// element whose result is returned.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if every call returns `Nothing`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Maybe;
/// use functional_utils::sequence::pick;
///
/// let first_even = pick(|n: i32| if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() }, [1, 2, 3, 4]);
/// assert_eq!(first_even, Ok(2));
/// ```
pub fn pick<T, U, F, I>(mut function: F, sequence: I) -> Result<U, SequenceError>
where
    F: FnMut(T) -> Maybe<U>,
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .find_map(|element| function(element).into_option())
        .ok_or(SequenceError::not_found("pick"))
}

/// Returns the last element of the sequence.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if the sequence is empty.
pub fn last<T, I>(sequence: I) -> Result<T, SequenceError>
where
    I: IntoIterator<Item = T>,
{
    sequence
        .into_iter()
        .last()
        .ok_or(SequenceError::not_found("last"))
}

/// Returns `true` if some element is accepted by `predicate`; stops at the
/// first one.
#[inline]
#[must_use]
pub fn exists<T, P, I>(mut predicate: P, sequence: I) -> bool
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().any(|element| predicate(&element))
}

/// Returns `true` if every element is accepted by `predicate`.
///
/// Defined as "no element is rejected", so it stops at the first
/// counterexample and holds vacuously for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::for_all;
///
/// assert!(for_all(|n: &i32| *n > 0, [1, 2, 3]));
/// assert!(for_all(|n: &i32| *n > 0, []));
/// assert!(!for_all(|n: &i32| *n > 1, [1, 2, 3]));
/// ```
#[inline]
#[must_use]
pub fn for_all<T, P, I>(mut predicate: P, sequence: I) -> bool
where
    P: FnMut(&T) -> bool,
    I: IntoIterator<Item = T>,
{
    !exists(|element: &T| !predicate(element), sequence)
}

/// Applies `predicate` pairwise to two sequences advanced in lockstep.
///
/// A rejected pair returns `Ok(false)` at once, whatever remains in either
/// sequence. Lengths are only compared once every pair has been accepted.
///
/// # Errors
///
/// Returns [`SequenceError::LengthMismatch`] if all pairs were accepted and
/// one sequence still has elements left.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::{for_all2, SequenceError};
///
/// let equal = |a: &i32, b: &i32| a == b;
/// assert_eq!(for_all2(equal, [1, 2], [1, 2]), Ok(true));
/// assert_eq!(for_all2(equal, [0, 2, 3], [1, 2]), Ok(false));
/// assert!(matches!(
///     for_all2(equal, [1, 2, 3], [1, 2]),
///     Err(SequenceError::LengthMismatch { .. })
/// ));
/// ```
pub fn for_all2<A, B, P, I, J>(mut predicate: P, first: I, second: J) -> Result<bool, SequenceError>
where
    P: FnMut(&A, &B) -> bool,
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    loop {
        match (first.next(), second.next()) {
            (Some(left), Some(right)) => {
                if !predicate(&left, &right) {
                    return Ok(false);
                }
            }
            (None, None) => return Ok(true),
            _ => return Err(SequenceError::length_mismatch("for_all2")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn pick_calls_function_once_per_visited_element() {
        let calls = Cell::new(0);
        let picked = pick(
            |n: i32| {
                calls.set(calls.get() + 1);
                if n > 1 { Maybe::some(n * 10) } else { Maybe::none() }
            },
            [1, 2, 3],
        );
        assert_eq!(picked, Ok(20));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn pick_with_only_nothing_is_not_found() {
        let picked: Result<i32, _> = pick(|_: i32| Maybe::none(), [1, 2]);
        assert_eq!(picked, Err(SequenceError::NotFound { operation: "pick" }));
    }

    #[rstest]
    fn find_last_forward_agrees_with_find_last() {
        let values = vec![4, 7, 2, 9, 3];
        let odd = |n: &i32| n % 2 == 1;
        assert_eq!(find_last_forward(odd, values.clone()), find_last(odd, values));
    }

    #[rstest]
    fn find_index_of_missing_is_not_found() {
        assert!(matches!(
            find_index(|n: &i32| *n == 0, [1, 2]),
            Err(SequenceError::NotFound { operation: "find_index" })
        ));
    }

    #[rstest]
    fn last_of_empty_is_not_found() {
        assert!(last(Vec::<u8>::new()).is_err());
        assert_eq!(last([1, 2, 3]), Ok(3));
    }

    #[rstest]
    fn for_all_stops_at_first_counterexample() {
        let checked = Cell::new(0);
        let holds = for_all(
            |n: &i32| {
                checked.set(checked.get() + 1);
                *n < 2
            },
            [1, 5, 0, 0],
        );
        assert!(!holds);
        assert_eq!(checked.get(), 2);
    }

    #[rstest]
    fn for_all_accepts_stateful_predicate() {
        let mut previous = i32::MIN;
        let ascending = for_all(
            |n: &i32| {
                let ordered = previous <= *n;
                previous = *n;
                ordered
            },
            [1, 3, 3, 8],
        );
        assert!(ascending);
        assert_eq!(previous, 8);
    }

    #[rstest]
    fn for_all2_false_first_pair_skips_length_check() {
        let result = for_all2(|a: &i32, b: &i32| a == b, [9, 1, 2, 3], [1]);
        assert_eq!(result, Ok(false));
    }

    #[rstest]
    fn for_all2_reports_mismatch_after_full_traversal() {
        let result = for_all2(|a: &i32, b: &i32| a == b, [1], [1, 2]);
        assert_eq!(result, Err(SequenceError::LengthMismatch { operation: "for_all2" }));
    }
}
