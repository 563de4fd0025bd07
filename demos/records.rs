//! Records Demo
//!
//! Deduplicates a list of records by their rendering, uppercases the
//! descriptions, keeps the even ids and sums what is left. The source
//! sequence is printed again at the end to show it was never modified.
//!
//! Run with: `RUST_LOG=trace cargo run --example records`

use std::fmt;

use fluent_sequence::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
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

fn main() -> Result<(), SequenceError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fluent_sequence=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let records = Sequence::of(vec![
        Record::new(1, 1, "foo"),
        Record::new(2, 2, "bar"),
        Record::new(3, 3, "baz"),
        Record::new(4, 4, "qux"),
        Record::new(5, 5, "zoo"),
        Record::new(6, 5, "zoo"),
    ]);

    let result = records
        .distinct_by(|left, right| left.to_string().cmp(&right.to_string()))
        .map(|mut record| {
            record.description = record.description.to_uppercase();
            record
        })
        .filter(|record| record.id % 2 == 0)
        .reduce(|mut left, right| {
            left.accumulated += right.accumulated;
            left
        })?;

    tracing::info!(?result, "pipeline finished");

    // The source sequence is not modified
    records.for_each(|record| {
        tracing::info!(
            id = record.id,
            accumulated = record.accumulated,
            description = %record.description,
            data = ?record.data,
            "source record"
        );
    });

    Ok(())
}
