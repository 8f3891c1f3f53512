//! Building sequences from a seed.

use super::error::SequenceError;
use crate::control::Maybe;

/// Repeatedly unspools `seed` until `finished` says to stop.
///
/// Each step checks `finished(&state)` first; if it does not hold,
/// `unspool(state)` returns the next element and the next state.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::unfold;
///
/// let powers = unfold(|n: u32| (n, n * 2), |n: &u32| *n > 20, 1);
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
#[must_use]
pub fn unfold<T, S, U, P>(mut unspool: U, mut finished: P, seed: S) -> Vec<T>
where
    U: FnMut(S) -> (T, S),
    P: FnMut(&S) -> bool,
{
    let mut unfolded = Vec::new();
    let mut state = seed;
    while !finished(&state) {
        let (element, next) = unspool(state);
        unfolded.push(element);
        state = next;
    }
    unfolded
}

/// Repeatedly unspools `seed` until `unspool` returns `Nothing`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Maybe;
/// use functional_utils::sequence::unfold_maybe;
///
/// let countdown = unfold_maybe(|n: u8| if n == 0 { Maybe::none() } else { Maybe::some((n, n - 1)) }, 3);
/// assert_eq!(countdown, vec![3, 2, 1]);
/// ```
#[must_use]
pub fn unfold_maybe<T, S, U>(mut unspool: U, seed: S) -> Vec<T>
where
    U: FnMut(S) -> Maybe<(T, S)>,
{
    let mut unfolded = Vec::new();
    let mut step = unspool(seed);
    while let Maybe::Just((element, next)) = step {
        unfolded.push(element);
        step = unspool(next);
    }
    unfolded
}

/// Generates `function(1), function(2), ..., function(count)`.
///
/// Positions start at one.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `count` is zero.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::init;
///
/// assert_eq!(init(|i| 2 * i, 5), Ok(vec![2, 4, 6, 8, 10]));
/// assert!(init(|i| i, 0).is_err());
/// ```
pub fn init<T, F>(mut function: F, count: usize) -> Result<Vec<T>, SequenceError>
where
    F: FnMut(usize) -> T,
{
    if count == 0 {
        return Err(SequenceError::zero_count("init"));
    }
    Ok(unfold(
        |position: usize| (function(position), position + 1),
        |position: &usize| *position > count,
        1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unfold_finished_at_seed_is_empty() {
        let nothing: Vec<i32> = unfold(|n: i32| (n, n + 1), |_| true, 0);
        assert!(nothing.is_empty());
    }

    #[rstest]
    #[case(1, vec![1])]
    #[case(4, vec![1, 2, 3, 4])]
    fn init_is_one_based(#[case] count: usize, #[case] expected: Vec<usize>) {
        assert_eq!(init(|position| position, count), Ok(expected));
    }

    #[rstest]
    fn init_with_zero_count_is_invalid() {
        assert_eq!(
            init(|position| position, 0),
            Err(SequenceError::InvalidArgument {
                operation: "init",
                argument: "count",
                reason: "must be greater than zero",
            })
        );
    }
}
