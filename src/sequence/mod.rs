//! Immutable sequence wrapper and its transformation operations.
//!
//! This module provides [`Sequence`], a handle around a shared, never-mutated
//! buffer of elements:
//!
//! - [`Sequence::filter`] / [`Sequence::map`]: build a new sequence element-wise
//! - [`Sequence::reduce`]: left fold seeded with the first element
//! - [`Sequence::for_each`] / [`Sequence::count`]: traversal and length
//! - [`Sequence::distinct_by`]: sort-then-compact deduplication
//! - [`Sequence::to_slice`]: borrowed view of the current elements
//!
//! # Immutability
//!
//! No operation takes `&mut self`. Transformations allocate a fresh buffer
//! and return a new sequence; the receiver keeps yielding exactly the elements
//! it was built with.
//!
//! # Examples
//!
//! ```rust
//! use fluent_sequence::sequence::Sequence;
//!
//! let original = Sequence::of(vec![5, 3, 5, 1]);
//!
//! let distinct = original.distinct_by(|left, right| left.cmp(right));
//! assert_eq!(distinct.to_slice(), &[1, 3, 5]);   // Sort order, one per value
//! assert_eq!(original.to_slice(), &[5, 3, 5, 1]); // Original unchanged
//! ```
//!
//! # Thread Safety
//!
//! With the `arc` feature the buffer is shared through `Arc` and a sequence of
//! `Send + Sync` elements can be read from many threads at once. Nothing in
//! this module locks; concurrent reads are safe because nothing writes.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod distinct;
mod error;
#[cfg(feature = "serde")]
mod serde_support;
mod wrapper;

pub use error::SequenceError;
pub use wrapper::Sequence;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_shares_buffer() {
        let buffer: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1, 2, 3]);
        let shared = ReferenceCounter::clone(&buffer);
        assert!(ReferenceCounter::ptr_eq(&buffer, &shared));
        assert_eq!(*buffer, *shared);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let buffer: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![42]);
        assert_eq!(ReferenceCounter::strong_count(&buffer), 1);
        let shared = ReferenceCounter::clone(&buffer);
        assert_eq!(ReferenceCounter::strong_count(&buffer), 2);
        drop(shared);
        assert_eq!(ReferenceCounter::strong_count(&buffer), 1);
    }
}
