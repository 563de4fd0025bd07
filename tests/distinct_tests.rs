//! Tests for comparator-driven deduplication.
//!
//! `distinct_by` sorts a private copy with the caller's comparator and keeps
//! one element per run of equal elements. These tests pin down the parts of
//! that behaviour callers can rely on.

use std::cmp::Ordering;
use std::fmt;

use fluent_sequence::sequence::Sequence;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    id: i32,
    accumulated: i32,
    description: String,
    data: Vec<i32>,
}

impl Record {
    fn new(id: i32, accumulated: i32, description: &str) -> Self {
        Self {
            id,
            accumulated,
            description: description.to_string(),
            data: vec![1, 2, 3, 4, 5],
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "accumulated: {}, description: {}",
            self.accumulated, self.description
        )
    }
}

fn by_rendering(left: &Record, right: &Record) -> Ordering {
    left.to_string().cmp(&right.to_string())
}

fn natural(left: &i32, right: &i32) -> Ordering {
    if left == right {
        Ordering::Equal
    } else if left < right {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[fixture]
fn records() -> Sequence<Record> {
    Sequence::of(vec![
        Record::new(1, 1, "foo"),
        Record::new(2, 2, "bar"),
        Record::new(3, 3, "baz"),
        Record::new(4, 4, "qux"),
        Record::new(5, 5, "zoo"),
        Record::new(6, 5, "zoo"),
    ])
}

// =============================================================================
// Already distinct input
// =============================================================================

#[rstest]
fn test_distinct_of_pairwise_distinct_keeps_everything() {
    let sequence: Sequence<i32> = (1..=10).collect();
    let result = sequence.distinct_by(natural);

    assert_eq!(result.count(), 10);
    let mut elements = result.to_vec();
    elements.sort_unstable();
    assert_eq!(elements, (1..=10).collect::<Vec<_>>());
}

#[rstest]
fn test_distinct_of_empty_is_empty() {
    let sequence: Sequence<i32> = Sequence::new();
    assert!(sequence.distinct_by(natural).is_empty());
}

// =============================================================================
// Custom comparator
// =============================================================================

#[rstest]
fn test_records_equal_by_rendering_collapse_to_one(records: Sequence<Record>) {
    let result = records.distinct_by(by_rendering);

    assert_eq!(result.count(), 5);
    let zoo_count = result
        .iter()
        .filter(|record| record.description == "zoo")
        .count();
    assert_eq!(zoo_count, 1);
}

#[rstest]
fn test_survivor_is_first_in_sort_order(records: Sequence<Record>) {
    let result = records.distinct_by(by_rendering);
    let rendered: Vec<String> = result.iter().map(ToString::to_string).collect();

    let mut expected: Vec<String> = records.iter().map(ToString::to_string).collect();
    expected.sort();
    expected.dedup();

    assert_eq!(rendered, expected);
}

#[rstest]
fn test_survivor_is_one_of_the_equal_records(records: Sequence<Record>) {
    let result = records.distinct_by(by_rendering);
    let survivor = result
        .iter()
        .find(|record| record.description == "zoo")
        .map(|record| record.id);

    assert!(matches!(survivor, Some(5 | 6)));
}

#[rstest]
fn test_output_is_sort_order_not_input_order() {
    let sequence = Sequence::of(vec![3, 1, 2]);
    assert_eq!(sequence.distinct_by(natural).to_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_descending_comparator() {
    let sequence = Sequence::of(vec![2, 7, 2, 5, 7]);
    let result = sequence.distinct_by(|left, right| right.cmp(left));
    assert_eq!(result.to_slice(), &[7, 5, 2]);
}

#[rstest]
fn test_distinct_by_key_on_records(records: Sequence<Record>) {
    let result = records.distinct_by_key(|record| record.accumulated);
    let accumulated: Vec<i32> = result.iter().map(|record| record.accumulated).collect();
    assert_eq!(accumulated, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Non-destructive / idempotent
// =============================================================================

#[rstest]
fn test_receiver_is_unchanged(records: Sequence<Record>) {
    let before = records.to_vec();
    let _ = records.distinct_by(by_rendering);
    assert_eq!(records.to_slice(), before.as_slice());
}

#[rstest]
fn test_receiver_order_is_unchanged_for_unsorted_input() {
    let sequence = Sequence::of(vec![10, 1, 10, 5, 1]);
    let _ = sequence.distinct_by(natural);
    assert_eq!(sequence.to_slice(), &[10, 1, 10, 5, 1]);
}

#[rstest]
fn test_inconsistent_comparator_still_returns() {
    let elements: Vec<i32> = (0..2_500).map(|index| (index * 31) % 211).collect();
    let sequence = Sequence::of(elements.clone());
    let mut calls = 0_u32;
    let distinct = sequence.distinct_by(|_, _| {
        calls += 1;
        match calls % 3 {
            0 => Ordering::Equal,
            1 => Ordering::Greater,
            _ => Ordering::Less,
        }
    });
    assert!(distinct.count() <= sequence.count());
    assert_eq!(sequence.to_slice(), elements.as_slice());
}

#[rstest]
fn test_distinct_is_idempotent(records: Sequence<Record>) {
    let once = records.distinct_by(by_rendering);
    let twice = once.distinct_by(by_rendering);
    assert_eq!(once, twice);
}

#[rstest]
#[case(vec![1, 1, 1, 1])]
#[case(vec![4, 3, 2, 1])]
#[case(vec![1, 3, 1, 3, 1, 3])]
fn test_distinct_natural_is_idempotent(#[case] elements: Vec<i32>) {
    let sequence = Sequence::of(elements);
    let once = sequence.distinct();
    assert_eq!(once.distinct(), once);
}

// =============================================================================
// Pipeline from the records demo
// =============================================================================

#[rstest]
fn test_records_pipeline(records: Sequence<Record>) {
    let distinct = records.distinct_by(by_rendering);
    let zoo_survivor = distinct
        .iter()
        .find(|record| record.description == "zoo")
        .map(|record| record.id)
        .expect("one zoo record survives");

    let result = distinct
        .map(|mut record| {
            record.description = record.description.to_uppercase();
            record
        })
        .filter(|record| record.id % 2 == 0)
        .reduce(|mut left, right| {
            left.accumulated += right.accumulated;
            left
        })
        .expect("pipeline keeps at least one record");

    let expected = if zoo_survivor % 2 == 0 { 2 + 4 + 5 } else { 2 + 4 };
    assert_eq!(result.id, 2);
    assert_eq!(result.accumulated, expected);
    assert_eq!(result.description, "BAR");

    // The source records are not affected
    assert_eq!(records.count(), 6);
    assert!(
        records
            .iter()
            .all(|record| record.description == record.description.to_lowercase())
    );
    assert!(records.iter().all(|record| record.data == vec![1, 2, 3, 4, 5]));
}
