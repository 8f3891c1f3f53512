//! Predicate-driven dispatch.
//!
//! [`switch`] evaluates a list of [`Case`]s in order and returns the result of
//! the first one whose predicate accepts the input. Predicates after the
//! winning case are never evaluated.
//!
//! ```rust
//! use functional_utils::control::{switch, Case};
//!
//! let classify = |n: i32| {
//!     switch(
//!         n,
//!         [
//!             Case::new(|n: &i32| *n < 0, |_| "negative"),
//!             Case::new(|n: &i32| *n == 0, |_| "zero"),
//!         ],
//!         |_| "positive",
//!     )
//! };
//! assert_eq!(classify(-3), "negative");
//! assert_eq!(classify(0), "zero");
//! assert_eq!(classify(8), "positive");
//! ```

use std::fmt;

/// One branch of a [`switch`]: a predicate and the function producing the
/// result when the predicate holds.
pub struct Case<'a, A, B> {
    predicate: Box<dyn Fn(&A) -> bool + 'a>,
    result: Box<dyn FnOnce(A) -> B + 'a>,
}

impl<'a, A, B> Case<'a, A, B> {
    /// Creates a case from a predicate and a result function.
    #[must_use]
    pub fn new<P, R>(predicate: P, result: R) -> Self
    where
        P: Fn(&A) -> bool + 'a,
        R: FnOnce(A) -> B + 'a,
    {
        Self {
            predicate: Box::new(predicate),
            result: Box::new(result),
        }
    }

    /// Returns `true` if this case accepts `input`.
    #[inline]
    #[must_use]
    pub fn matches(&self, input: &A) -> bool {
        (self.predicate)(input)
    }

    /// Consumes the case and produces its result for `input`.
    #[inline]
    #[must_use]
    pub fn apply(self, input: A) -> B {
        (self.result)(input)
    }
}

impl<A, B> fmt::Debug for Case<'_, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Case").finish_non_exhaustive()
    }
}

/// Returns the result of the first case whose predicate accepts `input`, or
/// `default(input)` when none does.
#[must_use]
pub fn switch<'a, A, B, I, D>(input: A, cases: I, default: D) -> B
where
    I: IntoIterator<Item = Case<'a, A, B>>,
    D: FnOnce(A) -> B,
    A: 'a,
    B: 'a,
{
    for case in cases {
        if case.matches(&input) {
            return case.apply(input);
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!("switch fell back to its default branch");
    default(input)
}

/// Two-way dispatch: `then_branch(input)` if `predicate` holds, else
/// `else_branch(input)`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::if_then_else;
///
/// let label = |n: i32| if_then_else(n, |n: &i32| n % 2 == 0, |_| "even", |_| "odd");
/// assert_eq!(label(4), "even");
/// assert_eq!(label(5), "odd");
/// ```
#[inline]
#[must_use]
pub fn if_then_else<A, B, P, T, E>(input: A, predicate: P, then_branch: T, else_branch: E) -> B
where
    P: FnOnce(&A) -> bool,
    T: FnOnce(A) -> B,
    E: FnOnce(A) -> B,
{
    if predicate(&input) {
        then_branch(input)
    } else {
        else_branch(input)
    }
}
