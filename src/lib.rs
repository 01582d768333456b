//! NOAA Event Report Library
//!
//! A Rust library for turning NOAA/SWPC daily solar event reports
//! (`<yyyy><mm><dd>events.txt`) into structured event records.
//!
//! This library provides tools for:
//! - Classifying report lines and merging continuation markers
//! - Keeping only rows from 3-letter observatories
//! - Resolving active region numbers with a ±25 continuity window seeded
//!   from the previous day's report
//! - Segmenting the variable-width particulars field
//! - Selecting events and regions inside a time window
//! - Writing records to CSV or Parquet through Polars
//!
//! ```no_run
//! use noaa_events::{EventReport, TimeWindow};
//! use std::path::Path;
//!
//! let report = EventReport::from_directory(Path::new("reports"), 2002, 4, 9)?;
//! let window = TimeWindow::from_timestamps("2002-04-09 12:44:43", "2002-04-09 13:09:58")?;
//! for region in report.active_regions(&window) {
//!     println!("{}", region);
//! }
//! # Ok::<(), noaa_events::ReportError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod context_provider;
        pub mod frame_writer;
        pub mod line_classifier;
        pub mod observatory_filter;
        pub mod record_assembler;
        pub mod report;
        pub mod segmentation;
        pub mod time_range;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActiveRegion, EventRecord, ReportDate};
pub use app::services::report::{EventReport, process_lines};
pub use app::services::time_range::TimeWindow;
pub use config::Config;
pub use error::{ReportError, Result};
