//! Application constants for the NOAA event report parser
//!
//! Field positions, continuity thresholds, file naming, and output column
//! names used throughout the pipeline.

// =============================================================================
// Line Format
// =============================================================================

/// First-token prefixes that mark header and comment lines
pub const COMMENT_PREFIXES: &[char] = &[':', '#'];

/// Token that marks a continuation event in the second column
pub const CONTINUATION_MARKER: &str = "+";

/// Fixed token positions in a merged row
pub mod positions {
    pub const EVENT: usize = 0;
    pub const BEGIN: usize = 1;
    pub const MAX: usize = 2;
    pub const END: usize = 3;
    pub const OBSERVATORY: usize = 4;
    pub const QUALITY: usize = 5;
    pub const TYPE: usize = 6;
    pub const LOCATION: usize = 7;
}

/// Required observatory code width
pub const OBSERVATORY_CODE_LEN: usize = 3;

/// Required quality flag width
pub const QUALITY_FLAG_LEN: usize = 1;

// =============================================================================
// Region Continuity
// =============================================================================

/// Active region numbers are exactly this many digits
pub const REGION_DIGITS: usize = 4;

/// Placeholder region number that is never a real region
pub const NULL_REGION: &str = "0000";

/// Maximum distance (inclusive) between consecutive accepted regions
pub const REGION_CONTINUITY_WINDOW: u32 = 25;

// =============================================================================
// Particulars Segmentation
// =============================================================================

/// Rows longer than this with a numeric tail carry two-token particulars
pub const NUMERIC_TAIL_WIDE_ROW: usize = 10;

/// Rows longer than this with a text tail carry two-token particulars
pub const TEXT_TAIL_WIDE_ROW: usize = 9;

// =============================================================================
// Time Range Filter
// =============================================================================

/// Byte range of the HH:MM slice in an ISO-like timestamp
pub const TIMESTAMP_HHMM_START: usize = 11;
pub const TIMESTAMP_HHMM_END: usize = 16;

/// End times numerically below this are treated as unusable
pub const MIN_COMPARABLE_END: u32 = 10;

// =============================================================================
// Files and Environment
// =============================================================================

/// Report file name suffix after the `yyyymmdd` date stamp
pub const REPORT_FILE_SUFFIX: &str = "events.txt";

/// Glob pattern for report discovery within a directory
pub const REPORT_FILE_GLOB: &str = "*events.txt";

/// Regex matching a report file name and capturing year, month and day
pub const REPORT_FILE_REGEX: &str = r"^(\d{4})(\d{2})(\d{2})events\.txt$";

/// Application directory name under the user data directory
pub const APP_DIR_NAME: &str = "noaa-events";

/// Environment variable overriding the reports directory
pub const ENV_REPORTS_DIR: &str = "NOAA_EVENTS_REPORTS_DIR";

/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "NOAA_EVENTS_OUTPUT_DIR";

/// Default output directory relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// =============================================================================
// Output Columns
// =============================================================================

/// Column names in fixed record order
pub mod columns {
    pub const DATE: &str = "date";
    pub const EVENT: &str = "event";
    pub const BEGIN: &str = "begin";
    pub const MAX: &str = "max";
    pub const END: &str = "end";
    pub const OBSERVATORY: &str = "obs";
    pub const QUALITY: &str = "Q";
    pub const TYPE: &str = "type";
    pub const LOCATION: &str = "loc/freq";
    pub const PARTICULARS: &str = "particulars";
    pub const REGION: &str = "reg";

    /// All record columns in assembly order
    pub const RECORD_COLUMNS: &[&str] = &[
        EVENT,
        BEGIN,
        MAX,
        END,
        OBSERVATORY,
        QUALITY,
        TYPE,
        LOCATION,
        PARTICULARS,
        REGION,
    ];
}
