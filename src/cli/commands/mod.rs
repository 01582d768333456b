//! Command implementations for the NOAA event report CLI
//!
//! Each command lives in its own module; this module dispatches to them.

pub mod convert;
pub mod parse;
pub mod regions;
pub mod scan;
pub mod shared;

use crate::app::models::ProcessingStats;
use crate::cli::args::{Args, Commands};
use anyhow::Result;
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging and configuration, then dispatches to the subcommand.
/// `parse`, `regions` and `scan` return empty statistics.
pub fn run(args: Args) -> Result<ProcessingStats> {
    shared::setup_logging(&args)?;

    info!("Starting noaa-events");
    debug!("Command line arguments: {:?}", args);

    let config = shared::load_configuration(&args)?;

    match &args.command {
        Some(Commands::Parse(day)) => parse::run_parse(&config, day),
        Some(Commands::Regions(regions_args)) => regions::run_regions(&config, regions_args),
        Some(Commands::Convert(convert_args)) => {
            convert::run_convert(config, convert_args, args.show_progress())
        }
        Some(Commands::Scan) | None => scan::run_scan(&config),
    }
}
