//! Command-line argument definitions for the NOAA event report parser
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::OutputFormat;
use crate::error::{ReportError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the NOAA event report parser
///
/// Converts NOAA/SWPC daily solar event reports into structured records,
/// resolving active region numbers against the previous day's report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "noaa-events",
    version,
    about = "Parse NOAA/SWPC daily solar event reports into structured records",
    long_about = "Reads <yyyy><mm><dd>events.txt solar event reports, segments each event line \
                  into fixed fields, particulars and active region number, and checks region \
                  numbers for continuity against the previous day's report. Records can be \
                  printed, filtered by time window, or converted to CSV/Parquet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the daily event reports
    ///
    /// Overrides NOAA_EVENTS_REPORTS_DIR and the default data directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        global = true,
        help = "Directory holding <yyyy><mm><dd>events.txt reports"
    )]
    pub reports_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", global = true, help = "Only show errors")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one day's report and print its records
    Parse(DayArgs),
    /// List events and active regions inside a time window
    Regions(RegionsArgs),
    /// Convert reports to a single CSV or Parquet frame
    Convert(ConvertArgs),
    /// List the reports available in the reports directory
    Scan,
}

/// Report day selection
#[derive(Debug, Clone, clap::Args)]
pub struct DayArgs {
    /// Report year, e.g. 2002
    pub year: i32,
    /// Report month (1-12)
    pub month: u32,
    /// Report day of month (1-31)
    pub day: u32,
}

/// Arguments for the regions command
#[derive(Debug, Clone, clap::Args)]
pub struct RegionsArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// Window start timestamp, e.g. "2002-04-09 12:44:43"
    #[arg(long = "from", value_name = "TIMESTAMP")]
    pub from: String,

    /// Window end timestamp, e.g. "2002-04-09 13:09:58"
    #[arg(long = "to", value_name = "TIMESTAMP")]
    pub to: String,
}

/// Arguments for the convert command
#[derive(Debug, Clone, clap::Args)]
pub struct ConvertArgs {
    /// First report date to convert (YYYY-MM-DD)
    #[arg(long = "from-date", value_name = "DATE")]
    pub from_date: Option<NaiveDate>,

    /// Last report date to convert (YYYY-MM-DD)
    #[arg(long = "to-date", value_name = "DATE")]
    pub to_date: Option<NaiveDate>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path
    ///
    /// Defaults to <output dir>/events_<first>_<last>.<ext>
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ConvertArgs {
    /// Validate the date bounds
    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            if from > to {
                return Err(ReportError::Configuration {
                    message: format!("--from-date {} is after --to-date {}", from, to),
                });
            }
        }
        Ok(())
    }

    /// True when `date` lies inside the requested bounds
    pub fn includes(&self, date: NaiveDate) -> bool {
        self.from_date.is_none_or(|from| date >= from) && self.to_date.is_none_or(|to| date <= to)
    }
}
