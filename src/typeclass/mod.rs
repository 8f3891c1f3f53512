//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! The crate's own containers (`Maybe`, `Attempt`) implement these traits
//! next to their definitions in [`crate::control`].
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::typeclass::{Applicative, Monad};
//!
//! let a = Some(1);
//! let b = Some(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Some(3));
//! assert_eq!(Some(4).flat_map(|x| Some(x * 2)), Some(8));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
