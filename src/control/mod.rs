//! Control structures for functional programming.
//!
//! - [`Maybe`]: An optional value with monadic composition
//! - [`Attempt`]: A deferred computation that captures failures
//! - [`Pair`] / [`Triplet`]: Named product types
//! - [`switch`] / [`Case`]: Ordered predicate dispatch
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use functional_utils::control::Maybe;
//!
//! let sum = Maybe::lift2(|a: i32, b: i32| a + b, Maybe::some(1), Maybe::some(2));
//! assert_eq!(sum, Maybe::some(3));
//! ```
//!
//! ## Capturing Failures
//!
//! ```rust
//! use functional_utils::control::Attempt;
//!
//! let attempt = Attempt::of(|| 5).bind(|x| Attempt::of(move || x + 1));
//! assert_eq!(*attempt.read().unwrap(), 6);
//! ```

mod attempt;
mod maybe;
mod switch;
mod tuple;

pub use attempt::{Attempt, Failure};
pub use maybe::{Maybe, NoValueAccessError};
pub use switch::{Case, if_then_else, switch};
pub use tuple::{Pair, Triplet};
