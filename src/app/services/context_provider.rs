//! Cross-day continuity context
//!
//! The first region candidate of a day is checked against the regions the
//! previous day's report resolved. That context is built by running the same
//! region resolver over the previous day's rows without a seed of its own,
//! so the lookback is exactly one day deep.

use crate::app::adapters::filesystem::ReportSource;
use crate::app::models::{ActiveRegion, ReportDate};
use crate::app::services::line_classifier::classify_lines;
use crate::app::services::segmentation::{accepted_regions, resolve_regions};
use crate::error::Result;
use tracing::debug;

/// Accepted regions of the day before `date`, oldest first
///
/// A previous-day report that cannot be read fails the whole call; there is
/// no fallback to an unseeded resolution.
pub fn previous_day_regions<S>(source: &S, date: ReportDate) -> Result<Vec<ActiveRegion>>
where
    S: ReportSource + ?Sized,
{
    let previous = date.previous()?;
    let lines = source.read_report(previous)?;

    // Previous-day rows are not observatory-filtered before resolution
    let rows = classify_lines(&lines);
    let regions = accepted_regions(&resolve_regions(&rows, None));

    debug!(
        "Continuity seed from {}: {} regions (most recent {:?})",
        previous,
        regions.len(),
        regions.last().map(ActiveRegion::as_str)
    );

    Ok(regions)
}
