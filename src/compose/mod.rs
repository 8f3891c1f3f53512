//! Function composition utilities.
//!
//! Composition is expressed with free functions over closures rather than
//! with function-object hierarchies:
//!
//! - [`then`]: Compose functions left-to-right
//! - [`flip`], [`bind_second`]: Rearrange or fix arguments
//! - [`negate`], [`negate2`]: Complement predicates
//! - [`delay`], [`delay2`]: Defer an application as a thunk
//! - [`identity`], [`constant`], [`apply_to`]
//!
//! Ready-made building blocks for the sequence combinators live alongside:
//! [`is_even`], [`is_odd`], [`sum`], [`count`], the comparison predicates and
//! [`range_from`].
//!
//! # Examples
//!
//! ```
//! use functional_utils::compose::{negate, then};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! assert_eq!(then(add_one, double)(5), 12);
//!
//! let is_small = |x: &i32| *x < 10;
//! assert!(negate(is_small)(&42));
//! ```

mod predicates;
mod utils;

pub use predicates::{
    between, count, greater_than, greater_than_or_equal, is_even, is_odd, less_than,
    less_than_or_equal, range_from, sum,
};
pub use utils::{apply_to, bind_second, constant, delay, delay2, flip, identity, negate, negate2, then};
