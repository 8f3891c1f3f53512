//! Ready-made predicates, accumulators and generators.
//!
//! These are plain functions (or functions returning closures) meant to be
//! handed straight to the sequence combinators:
//!
//! ```
//! use functional_utils::compose::{count, is_even, sum};
//! use functional_utils::sequence::{filter, fold};
//!
//! let evens = filter(is_even, [1, 2, 3, 4, 5, 6]);
//! assert_eq!(evens, vec![2, 4, 6]);
//! assert_eq!(fold(sum, 0, evens.iter().copied()), 12);
//! assert_eq!(fold(count, 0, evens), 3);
//! ```
//!
//! All of them are generic, so `i32`, `i64`, `u8` and friends each get their
//! own monomorphized copy.

use std::ops::{Add, Rem};

/// Returns `true` for even integers.
// `is_multiple_of` exists for unsigned integers only.
#[allow(clippy::manual_is_multiple_of)]
#[inline]
#[must_use]
pub fn is_even<T>(value: &T) -> bool
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    *value % T::from(2) == T::from(0)
}

/// Returns `true` for odd integers.
#[inline]
#[must_use]
pub fn is_odd<T>(value: &T) -> bool
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    !is_even(value)
}

/// Accumulator adding each element to the running state.
#[inline]
#[must_use]
pub fn sum<T: Add<Output = T>>(state: T, element: T) -> T {
    state + element
}

/// Accumulator counting elements, ignoring their values.
#[inline]
#[must_use]
pub fn count<T>(state: usize, _element: T) -> usize {
    state + 1
}

/// Returns a predicate that holds for values strictly greater than `bound`.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::greater_than;
///
/// let above_ten = greater_than(10);
/// assert!(above_ten(&11));
/// assert!(!above_ten(&10));
/// ```
#[inline]
#[must_use]
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value > bound
}

/// Returns a predicate that holds for values greater than or equal to `bound`.
#[inline]
#[must_use]
pub fn greater_than_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value >= bound
}

/// Returns a predicate that holds for values strictly less than `bound`.
#[inline]
#[must_use]
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value < bound
}

/// Returns a predicate that holds for values less than or equal to `bound`.
#[inline]
#[must_use]
pub fn less_than_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value <= bound
}

/// Returns `lower < value < upper`; both bounds are exclusive.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::between;
///
/// assert!(between(&1, &5, &3));
/// assert!(!between(&1, &5, &5));
/// ```
#[inline]
#[must_use]
pub fn between<T: PartialOrd + ?Sized>(lower: &T, upper: &T, value: &T) -> bool {
    value > lower && value < upper
}

/// Maps the 1-based positions produced by `init` onto `start, start + 1, ...`.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::range_from;
/// use functional_utils::sequence::init;
///
/// assert_eq!(init(range_from(10), 3), Ok(vec![10, 11, 12]));
/// ```
#[inline]
#[must_use]
pub fn range_from(start: usize) -> impl Fn(usize) -> usize {
    move |position| start + position - 1
}
