//! Combinators over closures.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Ignores its input and returns a fixed value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`then`]: Left-to-right composition, `then(f, g)(x) == g(f(x))`
//! - [`negate`] / [`negate2`]: Logical complement of a predicate
//! - [`delay`] / [`delay2`]: Turn an application into a thunk
//! - [`bind_second`]: Fix the second argument of a binary function
//! - [`apply_to`]: Feed a value into a function

/// Returns the value unchanged.
///
/// The identity function is the unit of composition:
/// `then(identity, f)` behaves like `f`.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Typically passed to `init` to build a sequence of identical elements.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::constant;
///
/// let always_five = constant::<_, usize>(5);
/// assert_eq!(always_five(100), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
#[must_use]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use functional_utils::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions left to right.
///
/// `then(first, second)(x)` evaluates `second(first(x))`.
///
/// # Laws
///
/// - **Associativity**: `then(then(f, g), h) == then(f, then(g, h))`
/// - **Identity**: `then(identity, f) == f == then(f, identity)`
///
/// # Examples
///
/// ```
/// use functional_utils::compose::then;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(then(add_one, double)(5), 12);
/// assert_eq!(then(double, add_one)(5), 11);
/// ```
#[inline]
#[must_use]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| second(first(value))
}

/// Returns the logical complement of a predicate.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::negate;
///
/// let is_positive = |x: &i32| *x > 0;
/// let is_not_positive = negate(is_positive);
/// assert!(is_not_positive(&-3));
/// assert!(!is_not_positive(&3));
/// ```
#[inline]
#[must_use]
pub fn negate<A: ?Sized, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |value| !predicate(value)
}

/// Returns the logical complement of a binary predicate.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::negate2;
///
/// let differ = negate2(|a: &i32, b: &i32| a == b);
/// assert!(differ(&1, &2));
/// ```
#[inline]
#[must_use]
pub fn negate2<A: ?Sized, B: ?Sized, P>(predicate: P) -> impl Fn(&A, &B) -> bool
where
    P: Fn(&A, &B) -> bool,
{
    move |first, second| !predicate(first, second)
}

/// Captures a function and its argument as a thunk without evaluating it.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::delay;
///
/// let thunk = delay(|x: i32| x * 10, 4);
/// assert_eq!(thunk(), 40);
/// ```
#[inline]
#[must_use]
pub fn delay<A, B, F>(function: F, argument: A) -> impl FnOnce() -> B
where
    F: FnOnce(A) -> B,
{
    move || function(argument)
}

/// Captures a binary function and both arguments as a thunk.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::delay2;
///
/// let thunk = delay2(|a: i32, b: i32| a - b, 10, 3);
/// assert_eq!(thunk(), 7);
/// ```
#[inline]
#[must_use]
pub fn delay2<A, B, C, F>(function: F, first: A, second: B) -> impl FnOnce() -> C
where
    F: FnOnce(A, B) -> C,
{
    move || function(first, second)
}

/// Fixes the second argument of a binary function.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::bind_second;
///
/// let divide_by_four = bind_second(|numerator: i32, denominator: i32| numerator / denominator, 4);
/// assert_eq!(divide_by_four(20), 5);
/// ```
#[inline]
#[must_use]
pub fn bind_second<A, B: Clone, C, F>(function: F, second: B) -> impl Fn(A) -> C
where
    F: Fn(A, B) -> C,
{
    move |first| function(first, second.clone())
}

/// Applies `function` to `value`.
///
/// Reads as "feed `value` into `function`" and lets a pipeline start from
/// a value rather than from a function.
///
/// # Examples
///
/// ```
/// use functional_utils::compose::apply_to;
///
/// assert_eq!(apply_to(vec![1, 2, 3], |v: Vec<i32>| v.len()), 3);
/// ```
#[inline]
pub fn apply_to<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_is_usable_in_constants() {
        const ANSWER: u32 = identity(42);
        assert_eq!(ANSWER, 42);
    }

    #[rstest]
    fn flip_twice_is_original() {
        let subtract = |a: i32, b: i32| a - b;
        let flipped_twice = flip(flip(subtract));
        assert_eq!(flipped_twice(10, 3), subtract(10, 3));
    }

    #[rstest]
    fn then_applies_left_to_right() {
        let describe = then(|x: i32| x * 3, |y: i32| format!("<{y}>"));
        assert_eq!(describe(4), "<12>");
    }

    #[rstest]
    fn then_with_identity_is_neutral() {
        let square = |x: i32| x * x;
        assert_eq!(then(identity, square)(7), square(7));
        assert_eq!(then(square, identity)(7), square(7));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    fn negate_inverts(#[case] input: i32, #[case] expected: bool) {
        let is_zero = |x: &i32| *x == 0;
        assert_eq!(negate(is_zero)(&input), expected);
    }

    #[rstest]
    fn delay_does_not_evaluate_until_called() {
        let called = std::cell::Cell::new(false);
        let thunk = delay(
            |x: i32| {
                called.set(true);
                x
            },
            1,
        );
        assert!(!called.get());
        assert_eq!(thunk(), 1);
        assert!(called.get());
    }

    #[rstest]
    fn bind_second_fixes_right_argument() {
        let power = bind_second(|base: u32, exponent: u32| base.pow(exponent), 2);
        assert_eq!(power(9), 81);
    }
}
