//! Parse command: resolve and print one day's report

use super::shared::print_records;
use crate::app::models::ProcessingStats;
use crate::app::services::report::EventReport;
use crate::cli::args::DayArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

pub fn run_parse(config: &Config, day: &DayArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    let report = EventReport::from_directory(&config.reports_dir, day.year, day.month, day.day)
        .with_context(|| {
            format!(
                "Failed to parse report for {}-{:02}-{:02} in {}",
                day.year,
                day.month,
                day.day,
                config.reports_dir.display()
            )
        })?;

    info!(
        "Parsed {} records for {} (seed: {} regions)",
        report.records().len(),
        report.date(),
        report.seed().len()
    );

    println!(
        "{} {}",
        "Event report".bright_green().bold(),
        report.date().to_string().bright_white()
    );
    print_records(report.records());

    Ok(ProcessingStats {
        days_processed: 1,
        total_records: report.records().len(),
        processing_time_ms: start_time.elapsed().as_millis(),
        ..Default::default()
    })
}
