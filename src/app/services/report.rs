//! Daily report pipeline
//!
//! Runs one report through every stage in the only order that keeps row
//! indices consistent:
//!
//! 1. Line classification (comments dropped, continuations merged)
//! 2. Observatory filtering (row set compacted)
//! 3. Region resolution against the continuity seed
//! 4. Particulars segmentation against the resolved regions
//! 5. Record assembly

use crate::app::adapters::filesystem::{ReportDirectory, ReportSource};
use crate::app::models::{ActiveRegion, EventRecord, ReportDate};
use crate::app::services::context_provider::previous_day_regions;
use crate::app::services::line_classifier::classify_lines;
use crate::app::services::observatory_filter::filter_observatories;
use crate::app::services::record_assembler::assemble_records;
use crate::app::services::segmentation::segment_tails;
use crate::app::services::time_range::{self, TimeWindow};
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Build records from one report's lines
///
/// Pure and deterministic: the same lines and seed always give the same
/// records.
pub fn process_lines<I, S>(lines: I, seed: Option<&[ActiveRegion]>) -> Vec<EventRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows = classify_lines(lines);
    let filtered = filter_observatories(rows);
    let tails = segment_tails(&filtered.rows, seed);
    assemble_records(&filtered, &tails)
}

/// One day's resolved report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventReport {
    date: ReportDate,
    seed: Vec<ActiveRegion>,
    records: Vec<EventRecord>,
}

impl EventReport {
    /// Resolve the report for `date` using the previous day as context
    ///
    /// Both the day's report and the previous day's report must exist.
    pub fn load<S>(source: &S, date: ReportDate) -> Result<Self>
    where
        S: ReportSource + ?Sized,
    {
        let seed = previous_day_regions(source, date)?;
        let lines = source.read_report(date)?;
        let records = process_lines(&lines, Some(seed.as_slice()));

        debug!(
            "Resolved {} records for {} ({} with regions)",
            records.len(),
            date,
            records.iter().filter(|r| r.region.is_some()).count()
        );

        Ok(Self {
            date,
            seed,
            records,
        })
    }

    /// Resolve the report for a year/month/day in a reports directory
    pub fn from_directory(dir: &Path, year: i32, month: u32, day: u32) -> Result<Self> {
        let date = ReportDate::new(year, month, day)?;
        Self::load(&ReportDirectory::new(dir), date)
    }

    pub fn date(&self) -> ReportDate {
        self.date
    }

    /// Regions carried over from the previous day
    pub fn seed(&self) -> &[ActiveRegion] {
        &self.seed
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }

    /// Records that begin and end inside `window`
    pub fn events_between(&self, window: &TimeWindow) -> Vec<&EventRecord> {
        time_range::select_records(&self.records, window)
    }

    /// Regions of the records inside `window`
    pub fn active_regions(&self, window: &TimeWindow) -> Vec<ActiveRegion> {
        time_range::active_regions(&self.records, window)
    }
}
