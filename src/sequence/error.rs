//! Error types for sequence operations.
//!
//! Only precondition violations that a caller can reasonably hit at runtime
//! get a typed error here. Everything else in [`Sequence`](super::Sequence)
//! is total.

use thiserror::Error;

/// Represents an operation that cannot be performed on the current contents
/// of a sequence.
///
/// # Examples
///
/// ```rust
/// use fluent_sequence::sequence::{Sequence, SequenceError};
///
/// let empty: Sequence<i32> = Sequence::new();
/// let error = empty.reduce(|accumulator, number| accumulator + number);
///
/// assert_eq!(error, Err(SequenceError::EmptySequence { operation: "reduce" }));
/// assert_eq!(
///     error.unwrap_err().to_string(),
///     "reduce: operation is invalid on an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operation needs at least one element to seed its result.
    #[error("{operation}: operation is invalid on an empty sequence")]
    EmptySequence {
        /// The name of the operation that was invoked.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Creates a [`SequenceError::EmptySequence`] for the named operation.
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }
}
