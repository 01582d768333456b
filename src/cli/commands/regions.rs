//! Regions command: events and active regions inside a time window

use super::shared::print_records;
use crate::app::models::{EventRecord, ProcessingStats};
use crate::app::services::report::EventReport;
use crate::app::services::time_range::TimeWindow;
use crate::cli::args::RegionsArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

pub fn run_regions(config: &Config, args: &RegionsArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    let window = TimeWindow::from_timestamps(&args.from, &args.to)
        .context("Failed to read the time window")?;
    let day = &args.day;
    let report = EventReport::from_directory(&config.reports_dir, day.year, day.month, day.day)
        .with_context(|| {
            format!(
                "Failed to parse report for {}-{:02}-{:02}",
                day.year, day.month, day.day
            )
        })?;

    let events: Vec<EventRecord> = report.events_between(&window).into_iter().cloned().collect();
    let regions = report.active_regions(&window);
    info!(
        "{} of {} records inside {:?}",
        events.len(),
        report.records().len(),
        window
    );

    println!(
        "{} {} [{} - {}]",
        "Events".bright_green().bold(),
        report.date().to_string().bright_white(),
        args.from,
        args.to
    );
    print_records(&events);

    println!();
    if regions.is_empty() {
        println!("{}", "No active regions in window".yellow());
    } else {
        let listed: Vec<String> = regions.iter().map(ToString::to_string).collect();
        println!(
            "{} {}",
            "Active regions:".bright_green().bold(),
            listed.join(", ").bright_cyan()
        );
    }

    Ok(ProcessingStats {
        days_processed: 1,
        total_records: events.len(),
        processing_time_ms: start_time.elapsed().as_millis(),
        ..Default::default()
    })
}
