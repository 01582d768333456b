//! Observatory code validation and row compaction
//!
//! Rows whose observatory column does not hold a three-character code are
//! not event rows the later extractors can trust, so they are removed
//! before any positional projection runs. The filter builds a new row
//! sequence instead of deleting in place, and keeps the original index of
//! each survivor.

use crate::app::models::RawRow;
use crate::constants::OBSERVATORY_CODE_LEN;
use tracing::debug;

/// Rows that survived observatory validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredRows {
    /// Surviving rows in original order
    pub rows: Vec<RawRow>,
    /// Observatory code of each surviving row
    pub observatories: Vec<String>,
    /// Index of each surviving row in the unfiltered sequence
    pub source_indices: Vec<usize>,
}

impl FilteredRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keep only rows with a valid observatory code
///
/// Must run before every other field extractor, since it changes row
/// cardinality.
pub fn filter_observatories(rows: Vec<RawRow>) -> FilteredRows {
    let total = rows.len();
    let mut filtered = FilteredRows::default();

    for (index, row) in rows.into_iter().enumerate() {
        let Some(code) = row.observatory().filter(|code| is_observatory_code(code)) else {
            continue;
        };
        filtered.observatories.push(code.to_string());
        filtered.source_indices.push(index);
        filtered.rows.push(row);
    }

    debug!(
        "Observatory filter kept {} of {} rows",
        filtered.len(),
        total
    );

    filtered
}

fn is_observatory_code(token: &str) -> bool {
    token.chars().count() == OBSERVATORY_CODE_LEN
}
