//! Higher-order sequence combinators.
//!
//! The functions at this level are eager: they consume any
//! [`IntoIterator`] and return owned results (`Vec`, `HashMap`, [`Pair`])
//! or, for the random-access operations, sub-slices of their input.
//! Failures are reported as [`SequenceError`].
//!
//! - Transforms: [`map`], [`mapi`], [`filter`], [`choose`], [`collect`],
//!   [`fold`], [`fold_and_choose`], [`partition`], [`sort_with`], [`join`]
//! - Searches: [`find`], [`find_last`], [`find_last_forward`], [`find_index`],
//!   [`pick`], [`last`], [`exists`], [`for_all`], [`for_all2`]
//! - Positional: [`zip`], [`zip3`], [`unzip`], [`unzip3`], [`concat`],
//!   [`append`]
//! - Prefixes: [`take`], [`skip`], [`take_while`], [`skip_while`],
//!   [`take_and_yield`]
//! - Keyed: [`group_by`], [`to_map`], [`map_dict`], [`to_set`]
//! - Generators: [`init`], [`unfold`], [`unfold_maybe`]
//!
//! The lazy counterparts live in [`stream`], and the set-valued ones
//! ([`set::filter`], [`set::intersection`], ...) in [`set`].
//!
//! [`Pair`]: crate::control::Pair
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::Maybe;
//! use functional_utils::sequence::{fold, init, pick, zip, SequenceError};
//!
//! assert_eq!(init(|i| 2 * i, 5), Ok(vec![2, 4, 6, 8, 10]));
//! assert_eq!(fold(|total, n| total + n, 0, [1, 2, 3, 4, 5]), 15);
//! assert!(matches!(zip([1, 2, 3], [1, 2]), Err(SequenceError::LengthMismatch { .. })));
//!
//! let even = |n: i32| if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() };
//! assert_eq!(pick(even, [1, 2, 3, 4]), Ok(2));
//! ```

mod combine;
mod error;
mod generate;
mod group;
mod prefix;
mod search;
pub mod set;
pub mod stream;
mod transform;

pub use combine::{append, concat, unzip, unzip3, zip, zip3};
pub use error::SequenceError;
pub use generate::{init, unfold, unfold_maybe};
pub use group::{GroupHasher, group_by, map_dict, to_map, to_set};
pub use prefix::{skip, skip_while, take, take_and_yield, take_while};
pub use search::{
    exists, find, find_index, find_last, find_last_forward, for_all, for_all2, last, pick,
};
pub use stream::Stream;
pub use transform::{
    choose, collect, filter, fold, fold_and_choose, join, map, mapi, partition, sort_with,
};
