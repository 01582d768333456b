//! Tests for row tail segmentation
//!
//! Shared fixtures for the region resolver and particulars segmenter tests.

mod region_tests;

use crate::app::models::{ActiveRegion, RawRow};

/// Tokenize a report line into a row
pub fn row(line: &str) -> RawRow {
    RawRow::from_line(line)
}

/// Rows whose only interesting feature is the last token
pub fn rows_with_tails(tails: &[&str]) -> Vec<RawRow> {
    tails
        .iter()
        .enumerate()
        .map(|(i, tail)| {
            row(&format!(
                "{} 0100 0110 0120 G10 5 XRA 1-8A C1.0 {}",
                4000 + i,
                tail
            ))
        })
        .collect()
}

pub fn region(value: &str) -> ActiveRegion {
    ActiveRegion::parse(value).expect("test region must be four digits")
}

pub fn regions(values: &[&str]) -> Vec<ActiveRegion> {
    values.iter().map(|value| region(value)).collect()
}

/// Resolved regions rendered back to strings for compact assertions
pub fn rendered(resolved: &[Option<ActiveRegion>]) -> Vec<Option<&str>> {
    resolved
        .iter()
        .map(|r| r.as_ref().map(ActiveRegion::as_str))
        .collect()
}
