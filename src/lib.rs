//! # functional-utils
//!
//! Higher-order sequence combinators, lazy pull-based streams and small
//! monadic helpers for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over GAT-emulated
//!   higher-kinded types
//! - **Function Composition**: `then`, `flip`, `negate`, `delay` and friends
//! - **Control Structures**: `Maybe`, `Attempt`, `Pair`/`Triplet`, `switch`
//! - **Sequences**: eager combinators (`choose`, `pick`, `partition`, `zip`,
//!   `group_by`, `fold_and_choose`, ...) and lazy [`Stream`](sequence::stream::Stream)
//!   adaptors with single-element lookahead
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: Function composition helpers
//! - `control`: `Maybe`, `Attempt`, tuples and `switch`
//! - `sequence`: Eager combinators and lazy streams
//! - `serde`: Serialization for `Maybe`, `Pair` and `Triplet`
//! - `tracing`: Diagnostic events from `Attempt` and `switch`
//! - `fxhash` / `ahash`: Faster hashers for `group_by` and `to_map`
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use functional_utils::prelude::*;
//!
//! let evens = choose(
//!     |n: i32| if n % 2 == 0 { Maybe::some(n * 10) } else { Maybe::none() },
//!     1..=6,
//! );
//! assert_eq!(evens, vec![20, 40, 60]);
//!
//! let first_even = pick(|n: i32| if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() }, [1, 3, 4, 6]);
//! assert_eq!(first_even, Ok(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use functional_utils::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
