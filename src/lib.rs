//! # fluent-sequence
//!
//! An immutable, eager sequence wrapper for building fluent pipelines over
//! an ordered collection without hand-writing iteration loops.
//!
//! ## Overview
//!
//! [`Sequence`](sequence::Sequence) wraps an ordered collection of elements of
//! one type and exposes:
//!
//! - **Filter / Map**: element-wise selection and transformation
//! - **Reduce / Fold**: left folds to a single value
//! - **ForEach / Count**: traversal for side effects and length
//! - **Distinct**: sort-then-compact deduplication driven by a caller-supplied
//!   three-way comparator
//!
//! Every transformation materializes a new sequence. The receiver's buffer is
//! shared, never mutated, so a sequence can be reused after any number of
//! derived pipelines.
//!
//! ## Feature Flags
//!
//! - `arc`: share buffers through `Arc` so sequences are `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fluent_sequence::prelude::*;
//!
//! let numbers = Sequence::of((1..=10).collect::<Vec<i32>>());
//!
//! let sum_of_doubled_evens = numbers
//!     .filter(|number| number % 2 == 0)
//!     .map(|number| number * 2)
//!     .reduce(|accumulator, number| accumulator + number);
//!
//! assert_eq!(sum_of_doubled_evens, Ok(60));
//! assert_eq!(numbers.count(), 10); // Original unchanged
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use fluent_sequence::prelude::*;
///
/// let sequence = Sequence::of(vec![3, 1, 2]);
/// assert_eq!(sequence.count(), 3);
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;

pub use sequence::{Sequence, SequenceError};
