//! Particulars segmentation of the variable-width row tail
//!
//! The particulars field is one or two tokens at the end of a row, ahead of
//! an optional region number. How many tokens it takes depends on whether
//! the last token looks like a region number and on the row length.

use crate::app::models::{ActiveRegion, RawRow};
use crate::constants::{NUMERIC_TAIL_WIDE_ROW, TEXT_TAIL_WIDE_ROW};

/// First resolved region of the day
///
/// Evaluated once per day and shared by every row, not per row.
pub fn region_anchor(regions: &[Option<ActiveRegion>]) -> Option<&ActiveRegion> {
    regions.iter().flatten().next()
}

/// Particulars text of a single row
///
/// The numeric-tail test is syntax only; it does not look at whether the
/// resolver accepted the number. Rows too short for the selected span have
/// no particulars.
pub fn segment_particulars(row: &RawRow, anchor: Option<&ActiveRegion>) -> Option<String> {
    let len = row.len();
    let last = len.checked_sub(1)?;
    let tail = row.token(last)?;

    match ActiveRegion::parse(tail) {
        Some(candidate) => {
            if len > NUMERIC_TAIL_WIDE_ROW {
                join_span(row, last.checked_sub(2)?, last - 1)
            } else if anchor.is_some_and(|anchor| candidate.is_near(anchor)) {
                Some(tail.to_string())
            } else {
                row.token(last.checked_sub(1)?).map(str::to_string)
            }
        }
        None => {
            if len > TEXT_TAIL_WIDE_ROW {
                join_span(row, last.checked_sub(1)?, last)
            } else {
                Some(tail.to_string())
            }
        }
    }
}

/// Particulars of every row against the day's region list
pub fn extract_particulars(rows: &[RawRow], regions: &[Option<ActiveRegion>]) -> Vec<Option<String>> {
    let anchor = region_anchor(regions);
    rows.iter()
        .map(|row| segment_particulars(row, anchor))
        .collect()
}

fn join_span(row: &RawRow, first: usize, second: usize) -> Option<String> {
    let first = row.token(first)?;
    let second = row.token(second)?;
    Some(format!("{} {}", first, second))
}
