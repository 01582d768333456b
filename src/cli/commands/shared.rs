//! Shared components for CLI commands
//!
//! Logging setup, layered configuration, progress bars and record tables used
//! across the command implementations.

use crate::app::models::{EventRecord, ProcessingStats};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::columns;
use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Set up structured logging for all commands
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("noaa_events={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::from_env();

    if let Some(dir) = &args.reports_dir {
        config = config.with_reports_dir(dir);
    }
    if args.verbose > 0 {
        config = config.with_verbose();
    }

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Create a progress bar for the batch conversion
pub fn create_progress_bar(total: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// One table row per record, in column order
pub fn record_row(record: &EventRecord) -> [String; 10] {
    [
        record.event.clone(),
        record.begin.clone(),
        record.max.clone(),
        record.end.clone(),
        record.observatory.clone(),
        cell(record.quality.as_deref()),
        cell(record.kind.as_deref()),
        cell(record.location.as_deref()),
        cell(record.particulars.as_deref()),
        cell(record.region.as_ref().map(|r| r.as_str())),
    ]
}

/// Print records as an aligned table
pub fn print_records(records: &[EventRecord]) {
    if records.is_empty() {
        println!("{}", "No event records".yellow());
        return;
    }

    let rows: Vec<[String; 10]> = records.iter().map(record_row).collect();
    let mut widths: Vec<usize> = columns::RECORD_COLUMNS.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let header: Vec<String> = columns::RECORD_COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect();
    println!("{}", header.join("  ").bright_white().bold());

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = width))
            .collect();
        let line = line.join("  ");
        if row[9] == "-" {
            println!("{}", line);
        } else {
            println!("{}", line.bright_cyan());
        }
    }
}

/// Print the batch summary
pub fn print_summary(stats: &ProcessingStats) {
    println!();
    println!("{}", "Conversion Summary".bright_green().bold());
    println!("{}", "=================".bright_green());
    println!("Days processed: {}", stats.days_processed.to_string().bright_cyan());
    if stats.days_failed > 0 {
        println!("Days failed:    {}", stats.days_failed.to_string().bright_red());
    }
    println!("Records:        {}", stats.total_records.to_string().bright_cyan());
    if let Some(path) = &stats.output_path {
        println!("Output:         {}", path.display().to_string().bright_white());
    }
    println!("Elapsed:        {} ms", stats.processing_time_ms);
}
