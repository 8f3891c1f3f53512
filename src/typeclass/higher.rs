//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Attempt<_>` as type constructors
//! directly. This module uses GAT to work around that, so that `Functor`,
//! `Applicative` and `Monad` can be written once and implemented by every
//! container in the crate.
//!
//! # Example
//!
//! ```rust
//! use functional_utils::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type, for
/// example `Option<A>` or `Maybe<A>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
