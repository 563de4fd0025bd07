//! Sort-then-compact deduplication.
//!
//! The receiver of a distinct operation is shared and immutable, so the
//! algorithm always works on a private copy:
//!
//! 1. Clone the elements into singleton runs
//! 2. Merge adjacent runs bottom-up with the caller's three-way comparator
//! 3. Drop every element that compares `Equal` to the last retained one
//!
//! The merge only ever asks `compare` which head to take next, so a comparator
//! that is not a total order scrambles the order but cannot abort the call.
//! The merge is stable: among elements that compare `Equal`, the survivor is
//! the one that came first in the input, but callers are only promised "one
//! representative per equal run".

use std::cmp::Ordering;

/// Returns the elements sorted by `compare` with adjacent equal runs
/// collapsed to their first element.
///
/// If `compare` is not a total order the result is unspecified, but the call
/// still returns and never yields more elements than it was given.
pub(crate) fn sort_and_compact<T, F>(elements: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut working = merge_sort(elements, &mut compare);
    working.dedup_by(|current, retained| compare(&*retained, &*current) == Ordering::Equal);
    working
}

/// Stable bottom-up merge sort over a copy of `elements`.
fn merge_sort<T, F>(elements: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs: Vec<Vec<T>> = elements.iter().map(|element| vec![element.clone()]).collect();

    while runs.len() > 1 {
        let mut merged_runs = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged_runs.push(merge(left, right, compare)),
                None => merged_runs.push(left),
            }
        }
        runs = merged_runs;
    }

    runs.pop().unwrap_or_default()
}

/// Merges two runs, taking from `right` only when its head is strictly less.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(left_head), Some(right_head)) => compare(right_head, left_head) == Ordering::Less,
            (Some(_), None) => {
                merged.extend(left);
                break;
            }
            (None, _) => {
                merged.extend(right);
                break;
            }
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged
}

/// Same as [`sort_and_compact`], comparing the keys extracted by `key`.
pub(crate) fn sort_and_compact_by_key<T, K, F>(elements: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_and_compact(elements, |left, right| key(left).cmp(&key(right)))
}
