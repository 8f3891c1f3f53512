//! Maybe type - an optional value with monadic composition.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It is the value returned by
//! the functions handed to `choose`, `pick`, `fold_and_choose` and
//! `unfold_maybe`, and it converts freely to and from [`Option`].
//!
//! Unlike [`Option::unwrap`], reading the value of a `Maybe` is fallible in
//! the type system: [`Maybe::value`] and [`Maybe::into_value`] return a
//! [`NoValueAccessError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::Maybe;
//!
//! let parsed = Maybe::some("42")
//!     .bind(|text| Maybe::from(text.parse::<i32>().ok()))
//!     .bind(|n| if n > 0 { Maybe::some(n * 2) } else { Maybe::none() });
//! assert_eq!(parsed, Maybe::some(84));
//!
//! let missing: Maybe<i32> = Maybe::none();
//! assert!(missing.into_value().is_err());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Just(T)` when present, `Nothing` when absent.
///
/// Every `Nothing` is equal to every other `Nothing`; two `Just`s are equal
/// exactly when their contents are equal.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Maybe;
///
/// assert_eq!(Maybe::<i32>::none(), Maybe::none());
/// assert_ne!(Maybe::some(1), Maybe::none());
/// assert_eq!(Maybe::some(1).value(), Ok(&1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

/// Error returned when reading the value of a [`Maybe::Nothing`].
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::{Maybe, NoValueAccessError};
///
/// let empty: Maybe<i32> = Maybe::none();
/// assert_eq!(empty.into_value(), Err(NoValueAccessError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoValueAccessError;

impl fmt::Display for NoValueAccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("attempted to read the value of an empty Maybe")
    }
}

impl std::error::Error for NoValueAccessError {}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Maybe`.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::Nothing
    }

    /// Creates a `Maybe` holding `value`.
    #[inline]
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Just(value)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueAccessError`] if this is `Nothing`.
    #[inline]
    pub const fn value(&self) -> Result<&T, NoValueAccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(NoValueAccessError),
        }
    }

    /// Consumes the `Maybe` and returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueAccessError`] if this is `Nothing`.
    #[inline]
    pub fn into_value(self) -> Result<T, NoValueAccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(NoValueAccessError),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    #[inline]
    #[must_use]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the contained value, keeping `Nothing` as is.
    #[inline]
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, function: F) -> Maybe<U> {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Monadic bind.
    ///
    /// `Nothing` short-circuits without calling `function`; otherwise the
    /// result of `function(value)` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(halve).bind(halve), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).bind(halve).bind(halve), Maybe::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Lifts a binary function over two `Maybe`s.
    ///
    /// Returns `Just(function(a, b))` only when both inputs are present;
    /// `function` is not called otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Maybe;
    ///
    /// let add = |a: i32, b: i32| a + b;
    /// assert_eq!(Maybe::lift2(add, Maybe::some(1), Maybe::some(2)), Maybe::some(3));
    /// assert_eq!(Maybe::lift2(add, Maybe::none(), Maybe::some(2)), Maybe::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn lift2<A, B, F>(function: F, first: Maybe<A>, second: Maybe<B>) -> Self
    where
        F: FnOnce(A, B) -> T,
    {
        match (first, second) {
            (Maybe::Just(a), Maybe::Just(b)) => Self::Just(function(a, b)),
            _ => Self::Nothing,
        }
    }

    /// Returns an iterator over the zero or one contained values.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Maybe::lift2(function, self, other)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}
