//! Applicative type class - lifting values and combining independent contexts.
//!
//! `map2` is the crate-wide name for the "lift a binary function over two
//! contexts" operation: `Maybe::lift2` and `Attempt::lift2` are exposed
//! through it.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use functional_utils::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// The function is only called when both contexts hold a value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Pairs the values of two applicative contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}
