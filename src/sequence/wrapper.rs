//! The [`Sequence`] handle and its operation set.
//!
//! # Overview
//!
//! A `Sequence` owns a reference-counted `Vec` that is never written after
//! construction. Operations fall into three groups:
//!
//! - **Transformations** (`filter`, `map`, `fmap`, `distinct_by`, ...) build a
//!   new buffer and return a new sequence
//! - **Folds** (`reduce`, `fold`) consume nothing and return a value
//! - **Views** (`to_slice`, `iter`, `count`, `for_each`, ...) only read
//!
//! Cloning a sequence is O(1): both handles share the same buffer.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity     |
//! |------------------|----------------|
//! | `of`             | O(1)           |
//! | `clone`          | O(1)           |
//! | `count`          | O(1)           |
//! | `to_slice`       | O(1)           |
//! | `filter`         | O(N)           |
//! | `map` / `fmap`   | O(N)           |
//! | `reduce`/`fold`  | O(N)           |
//! | `for_each`       | O(N)           |
//! | `distinct_by`    | O(N log N)     |

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use super::distinct;
use super::error::SequenceError;

// =============================================================================
// Sequence Definition
// =============================================================================

/// An immutable, eagerly evaluated sequence of elements.
///
/// Every transformation returns a new `Sequence`; the receiver's elements and
/// their order are never changed, so a sequence can be reused after any
/// number of derived pipelines.
///
/// Operations that build a new buffer need `T: Clone`, because the receiver
/// keeps its own copy of every element. No other capability is required from
/// `T`: predicates, transforms and comparators are passed per call.
///
/// # Examples
///
/// ```rust
/// use fluent_sequence::sequence::Sequence;
///
/// let numbers = Sequence::of(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
///
/// let evens = numbers.filter(|number| number % 2 == 0);
/// assert_eq!(evens.to_slice(), &[2, 4, 6, 8, 10]);
///
/// let total = numbers.reduce(|accumulator, number| accumulator + number);
/// assert_eq!(total, Ok(55));
///
/// // The original is untouched by both pipelines
/// assert_eq!(numbers.count(), 10);
/// ```
pub struct Sequence<T> {
    /// Shared, never-mutated backing buffer
    elements: ReferenceCounter<Vec<T>>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::of(Vec::new())
    }

    /// Wraps `elements` as the backing buffer of a new sequence.
    ///
    /// The vector is moved, not copied. No validation is performed and an
    /// empty vector is a valid sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec!["a", "b", "c"]);
    /// assert_eq!(sequence.to_slice(), &["a", "b", "c"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn of(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Creates a sequence containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::of(vec![element])
    }

    /// Returns the number of elements in the sequence.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::of(vec![1, 2, 3]).count(), 3);
    /// assert_eq!(Sequence::<i32>::new().count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the sequence.
    ///
    /// Alias of [`Sequence::count`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements currently held by the sequence, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![3, 1, 2]);
    /// assert_eq!(sequence.to_slice(), &[3, 1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Invokes `action` once for every element, in order.
    ///
    /// Nothing is built and the sequence is not modified. Any side effect is
    /// whatever `action` itself captures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![1, 2, 3]);
    /// let mut visited = Vec::new();
    /// sequence.for_each(|number| visited.push(*number));
    ///
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for element in self.iter() {
            action(element);
        }
    }

    /// Folds the sequence from the left starting with `initial`.
    ///
    /// Unlike [`Sequence::reduce`] this is total: an empty sequence returns
    /// `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let words = Sequence::of(vec!["a", "bb", "ccc"]);
    /// let total_length = words.fold(0, |accumulator, word| accumulator + word.len());
    /// assert_eq!(total_length, 6);
    /// ```
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence by cloning the elements of `slice`.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::of(slice.to_vec())
    }

    /// Returns a new sequence with the elements for which `predicate` holds.
    ///
    /// Relative order is preserved. When no element matches, the result is an
    /// empty sequence.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![1, 2, 3, 4, 5, 6]);
    /// let evens = sequence.filter(|number| number % 2 == 0);
    /// assert_eq!(evens.to_slice(), &[2, 4, 6]);
    ///
    /// let none = sequence.filter(|_| false);
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut selected = Vec::new();
        for element in self.iter() {
            if predicate(element) {
                selected.push(element.clone());
            }
        }
        Self::of(selected)
    }

    /// Returns a new sequence with `transform` applied to every element.
    ///
    /// The result has exactly as many elements as the receiver, in the same
    /// order. `transform` receives its own clone of each element, so changes
    /// made to the argument never show through the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![1, 2, 3]);
    /// let doubled = sequence.map(|number| number * 2);
    ///
    /// assert_eq!(doubled.to_slice(), &[2, 4, 6]);
    /// assert_eq!(sequence.to_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.fmap(transform)
    }

    /// Returns a new sequence of a possibly different element type with
    /// `transform` applied to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![1, 22, 333]);
    /// let rendered = sequence.fmap(|number| number.to_string());
    /// assert_eq!(rendered.to_slice(), &["1", "22", "333"]);
    /// ```
    #[must_use]
    pub fn fmap<B, F>(&self, transform: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        Sequence::of(self.iter().cloned().map(transform).collect())
    }

    /// Folds the sequence from the left, seeded with the first element.
    ///
    /// For `[e0, e1, ..., en]` the result is
    /// `combine(...combine(combine(e0, e1), e2)..., en)`. A single-element
    /// sequence returns that element unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty,
    /// since there is no element to seed the accumulator with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::{Sequence, SequenceError};
    ///
    /// let sequence: Sequence<i32> = (1..=10).collect();
    /// assert_eq!(sequence.reduce(|accumulator, number| accumulator + number), Ok(55));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(
    ///     empty.reduce(|accumulator, number| accumulator + number),
    ///     Err(SequenceError::EmptySequence { operation: "reduce" })
    /// );
    /// ```
    pub fn reduce<F>(&self, mut combine: F) -> Result<T, SequenceError>
    where
        F: FnMut(T, T) -> T,
    {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            tracing::debug!(operation = "reduce", "operation invoked on an empty sequence");
            return Err(SequenceError::empty("reduce"));
        };
        Ok(iter.fold(first.clone(), |accumulator, element| {
            combine(accumulator, element.clone())
        }))
    }

    /// Returns a new sequence sorted by `compare` with duplicates removed.
    ///
    /// The elements are copied, the copy is sorted with `compare`, and every
    /// run of adjacent elements comparing [`Ordering::Equal`] is collapsed to
    /// one representative. The receiver is not reordered.
    ///
    /// The result is in sort order, not in the receiver's order. Which of
    /// several equal elements is kept is not part of the contract.
    ///
    /// `compare` should be a total order. With an inconsistent comparator the
    /// result is unspecified, but the call still returns a sequence no longer
    /// than the receiver.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec!["pear", "Apple", "apple", "PEAR"]);
    /// let distinct = sequence.distinct_by(|left, right| {
    ///     left.to_lowercase().cmp(&right.to_lowercase())
    /// });
    ///
    /// assert_eq!(distinct.count(), 2);
    /// assert_eq!(sequence.to_slice(), &["pear", "Apple", "apple", "PEAR"]);
    /// ```
    #[must_use]
    pub fn distinct_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let compacted = distinct::sort_and_compact(self.to_slice(), compare);
        tracing::trace!(
            input_length = self.count(),
            output_length = compacted.len(),
            "distinct_by compacted sequence"
        );
        Self::of(compacted)
    }

    /// Returns a new sequence sorted by the key extracted with `key`, keeping
    /// one element per distinct key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let words = Sequence::of(vec!["kiwi", "fig", "plum", "apple"]);
    /// let by_length = words.distinct_by_key(|word| word.len());
    /// assert_eq!(by_length.count(), 3);
    /// ```
    #[must_use]
    pub fn distinct_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let compacted = distinct::sort_and_compact_by_key(self.to_slice(), key);
        tracing::trace!(
            input_length = self.count(),
            output_length = compacted.len(),
            "distinct_by_key compacted sequence"
        );
        Self::of(compacted)
    }

    /// Returns a copy of the elements as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.to_slice().to_vec()
    }

    /// Converts the sequence into a `Vec`.
    ///
    /// When this handle is the only owner of the buffer it is moved out
    /// without copying; otherwise the elements are cloned.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        ReferenceCounter::unwrap_or_clone(self.elements)
    }
}

impl<T: Ord + Clone> Sequence<T> {
    /// Returns a new sequence in ascending order with duplicates removed.
    ///
    /// Equivalent to `distinct_by(Ord::cmp)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::of(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(sequence.distinct().to_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        self.distinct_by(Ord::cmp)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Sequence<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::of(elements)
    }
}

impl<T: Clone> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.to_slice()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_slice() == other.to_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
