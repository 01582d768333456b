//! Record assembly from per-field projections
//!
//! Each fixed column is a straight positional projection over the filtered
//! rows. The assembler zips those projections with the observatory codes and
//! the tail segments into records, in row order.

use crate::app::models::{EventRecord, RawRow};
use crate::app::services::observatory_filter::FilteredRows;
use crate::app::services::segmentation::TailSegments;
use crate::constants::{QUALITY_FLAG_LEN, positions};

/// Quality flag of a row, present only when exactly one character wide
pub fn quality_flag(row: &RawRow) -> Option<String> {
    row.token(positions::QUALITY)
        .filter(|flag| flag.chars().count() == QUALITY_FLAG_LEN)
        .map(str::to_string)
}

fn column(row: &RawRow, index: usize) -> Option<String> {
    row.token(index).map(str::to_string)
}

/// Assemble one record per filtered row
///
/// `tails` must come from the same filtered rows, so every projection has
/// the same length.
pub fn assemble_records(filtered: &FilteredRows, tails: &TailSegments) -> Vec<EventRecord> {
    debug_assert_eq!(filtered.rows.len(), filtered.observatories.len());
    debug_assert_eq!(filtered.rows.len(), tails.regions.len());
    debug_assert_eq!(filtered.rows.len(), tails.particulars.len());

    filtered
        .rows
        .iter()
        .zip(&filtered.observatories)
        .zip(tails.particulars.iter().zip(&tails.regions))
        .map(|((row, observatory), (particulars, region))| EventRecord {
            // Rows past the observatory filter always carry tokens 0..=4
            event: column(row, positions::EVENT).unwrap_or_default(),
            begin: column(row, positions::BEGIN).unwrap_or_default(),
            max: column(row, positions::MAX).unwrap_or_default(),
            end: column(row, positions::END).unwrap_or_default(),
            observatory: observatory.clone(),
            quality: quality_flag(row),
            kind: column(row, positions::TYPE),
            location: column(row, positions::LOCATION),
            particulars: particulars.clone(),
            region: region.clone(),
        })
        .collect()
}
