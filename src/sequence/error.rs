//! Error type for the sequence combinators.
//!
//! Every fallible combinator returns `Result<_, SequenceError>`. The variants
//! name the operation that failed so that a propagated error still says where
//! it came from.

/// Errors raised by the sequence combinators.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::{take, SequenceError};
///
/// let error = take(5, [1, 2, 3]).unwrap_err();
/// assert_eq!(error, SequenceError::InsufficientElements { requested: 5, available: 3 });
/// assert_eq!(
///     error.to_string(),
///     "cannot take 5 elements from a sequence of 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// An argument was outside the accepted domain.
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The name of the offending argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// No element satisfied the search.
    NotFound {
        /// The search operation.
        operation: &'static str,
    },
    /// Sequences consumed in lockstep had differing lengths.
    LengthMismatch {
        /// The operation that consumed the sequences.
        operation: &'static str,
    },
    /// Fewer elements were available than requested.
    InsufficientElements {
        /// How many elements were requested.
        requested: usize,
        /// How many elements the sequence held.
        available: usize,
    },
}

impl SequenceError {
    pub(crate) const fn not_found(operation: &'static str) -> Self {
        Self::NotFound { operation }
    }

    pub(crate) const fn length_mismatch(operation: &'static str) -> Self {
        Self::LengthMismatch { operation }
    }

    pub(crate) const fn zero_count(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            argument: "count",
            reason: "must be greater than zero",
        }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                argument,
                reason,
            } => write!(formatter, "{operation}: `{argument}` {reason}"),
            Self::NotFound { operation } => {
                write!(formatter, "{operation}: no element satisfied the search")
            }
            Self::LengthMismatch { operation } => {
                write!(formatter, "{operation}: sequences have differing numbers of elements")
            }
            Self::InsufficientElements {
                requested,
                available,
            } => write!(
                formatter,
                "cannot take {requested} elements from a sequence of {available}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        assert_eq!(
            SequenceError::zero_count("init").to_string(),
            "init: `count` must be greater than zero"
        );
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            SequenceError::not_found("find").to_string(),
            "find: no element satisfied the search"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        assert_eq!(
            SequenceError::length_mismatch("zip").to_string(),
            "zip: sequences have differing numbers of elements"
        );
    }
}
