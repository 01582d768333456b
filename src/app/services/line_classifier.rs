//! Line classification for raw report text
//!
//! Turns the physical lines of one report into tokenized rows. Blank lines
//! and header/comment lines (first token starting with `:` or `#`) are
//! dropped, and continuation events have their `+` marker folded into the
//! event id.

use crate::app::models::RawRow;
use crate::constants::COMMENT_PREFIXES;
use tracing::debug;

/// Classify report lines into rows, in file order
///
/// Never fails: anything that is not an event line is skipped.
pub fn classify_lines<I, S>(lines: I) -> Vec<RawRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = 0;
    let mut rows: Vec<RawRow> = lines
        .into_iter()
        .filter_map(|line| {
            let row = RawRow::from_line(line.as_ref());
            if is_event_row(&row) {
                Some(row)
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    let merged = rows
        .iter_mut()
        .map(RawRow::merge_continuation)
        .filter(|merged| *merged)
        .count();

    debug!(
        "Classified {} event rows ({} lines skipped, {} continuations merged)",
        rows.len(),
        skipped,
        merged
    );

    rows
}

fn is_event_row(row: &RawRow) -> bool {
    match row.token(0) {
        Some(first) => !first.starts_with(COMMENT_PREFIXES),
        None => false,
    }
}
