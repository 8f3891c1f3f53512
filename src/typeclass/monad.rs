//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` is the crate-wide name for monadic bind: `Maybe::bind` and
//! `Attempt::bind` are exposed through it.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use functional_utils::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a context-producing function to the value and flattens the result.
    ///
    /// A context without a value short-circuits and `function` is not called.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}
