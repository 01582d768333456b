//! Data models for NOAA event report processing
//!
//! This module contains the core data structures for representing report
//! dates, tokenized report rows, active region numbers and the final event
//! records produced by the pipeline.

use crate::constants::{self, positions};
use crate::error::{ReportError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Report Date
// =============================================================================

/// Calendar day a report covers
///
/// Wraps a validated [`NaiveDate`] so an impossible year/month/day
/// combination is rejected before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Build a report date from its components
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ReportError::InvalidDate { year, month, day })
    }

    /// The calendar day immediately before this one
    pub fn previous(&self) -> Result<Self> {
        self.0
            .pred_opt()
            .map(Self)
            .ok_or(ReportError::NoPreviousDay { date: self.0 })
    }

    /// The calendar day immediately after this one, if representable
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Report file name, e.g. `20020409events.txt`
    pub fn file_name(&self) -> String {
        format!(
            "{:04}{:02}{:02}{}",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            constants::REPORT_FILE_SUFFIX
        )
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// =============================================================================
// Raw Rows
// =============================================================================

/// Whitespace-split tokens of one accepted report line
///
/// Continuation merging is the only mutation a row ever sees; everything
/// downstream reads tokens by position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    tokens: Vec<String>,
}

impl RawRow {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokenize a line on any run of whitespace
    pub fn from_line(line: &str) -> Self {
        Self::new(line.split_whitespace().map(str::to_string).collect())
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Fold a `+` continuation marker in the second column into the event id
    ///
    /// Returns true when the row was merged.
    pub fn merge_continuation(&mut self) -> bool {
        if self.token(1) != Some(constants::CONTINUATION_MARKER) {
            return false;
        }
        self.tokens.remove(1);
        self.tokens[positions::EVENT].push(' ');
        self.tokens[positions::EVENT].push_str(constants::CONTINUATION_MARKER);
        true
    }

    /// Token at the observatory position
    pub fn observatory(&self) -> Option<&str> {
        self.token(positions::OBSERVATORY)
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Active Regions
// =============================================================================

/// A syntactically valid active region number
///
/// Holds exactly four ASCII digits. Syntax alone does not make a real
/// region: `0000` parses, and the continuity checks in the region resolver
/// decide acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveRegion(String);

impl ActiveRegion {
    /// Parse a token that looks like a region number
    pub fn parse(token: &str) -> Option<Self> {
        if is_region_token(token) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    /// True for the `0000` placeholder
    pub fn is_null(&self) -> bool {
        self.0 == constants::NULL_REGION
    }

    pub fn number(&self) -> u32 {
        // Four ASCII digits always fit.
        self.0
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// True when both numbers are within the continuity window of each other
    pub fn is_near(&self, other: &ActiveRegion) -> bool {
        self.number().abs_diff(other.number()) <= constants::REGION_CONTINUITY_WINDOW
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActiveRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digit/length test shared by the region resolver and the particulars segmenter
pub fn is_region_token(token: &str) -> bool {
    token.len() == constants::REGION_DIGITS && token.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Event Records
// =============================================================================

/// One event line projected into named fields
///
/// Field order matches the output column order: event, begin, max, end,
/// observatory, quality flag, type, frequency/location, particulars, region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: String,
    pub begin: String,
    pub max: String,
    pub end: String,
    #[serde(rename = "obs")]
    pub observatory: String,
    #[serde(rename = "Q")]
    pub quality: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "loc/freq")]
    pub location: Option<String>,
    pub particulars: Option<String>,
    #[serde(rename = "reg")]
    pub region: Option<ActiveRegion>,
}

// =============================================================================
// Processing Statistics
// =============================================================================

/// Batch conversion statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub days_processed: usize,
    pub days_failed: usize,
    pub total_records: usize,
    pub output_path: Option<PathBuf>,
    pub processing_time_ms: u128,
}
