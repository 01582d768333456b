//! Time-range lookup over assembled records
//!
//! Begin and end times stay opaque strings in the records; this module
//! only compares them as four-digit integers against an HHMM window.

use crate::app::models::{ActiveRegion, EventRecord};
use crate::constants::{MIN_COMPARABLE_END, TIMESTAMP_HHMM_END, TIMESTAMP_HHMM_START};
use crate::error::{ReportError, Result};
use chrono::{DateTime, TimeZone, Timelike};
use tracing::trace;

/// Inclusive HHMM window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u32,
    pub stop: u32,
}

impl TimeWindow {
    pub fn new(start: u32, stop: u32) -> Self {
        Self { start, stop }
    }

    /// Build a window from timestamps such as `2002-04-09 12:44:43.999440+00:00`
    pub fn from_timestamps(start: &str, stop: &str) -> Result<Self> {
        Ok(Self::new(hhmm_from_timestamp(start)?, hhmm_from_timestamp(stop)?))
    }

    pub fn from_datetimes<Tz: TimeZone>(start: &DateTime<Tz>, stop: &DateTime<Tz>) -> Self {
        let hhmm = |dt: &DateTime<Tz>| dt.hour() * 100 + dt.minute();
        Self::new(hhmm(start), hhmm(stop))
    }

    /// True when the record begins and ends inside the window
    ///
    /// Records with non-numeric times, or an end below 10, never match.
    pub fn contains(&self, record: &EventRecord) -> bool {
        let (Ok(begin), Ok(end)) = (record.begin.parse::<u32>(), record.end.parse::<u32>()) else {
            trace!(
                "Skipping event {} with non-numeric times {}/{}",
                record.event, record.begin, record.end
            );
            return false;
        };

        if end < MIN_COMPARABLE_END {
            return false;
        }

        begin >= self.start && end <= self.stop
    }
}

/// Extract HHMM from the `HH:MM` slice of a timestamp
pub fn hhmm_from_timestamp(timestamp: &str) -> Result<u32> {
    timestamp
        .get(TIMESTAMP_HHMM_START..TIMESTAMP_HHMM_END)
        .map(|slice| slice.replace(':', ""))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| ReportError::InvalidTimestamp {
            value: timestamp.to_string(),
        })
}

/// Records inside the window, in order
pub fn select_records<'a>(records: &'a [EventRecord], window: &TimeWindow) -> Vec<&'a EventRecord> {
    records
        .iter()
        .filter(|record| window.contains(record))
        .collect()
}

/// Accepted regions of the records inside the window, in order
pub fn active_regions(records: &[EventRecord], window: &TimeWindow) -> Vec<ActiveRegion> {
    select_records(records, window)
        .into_iter()
        .filter_map(|record| record.region.clone())
        .collect()
}
