//! Convert command: batch a date range of reports into one frame
//!
//! Days are processed in date order. A day that fails (missing report,
//! missing previous day) is logged and counted, and the batch continues.

use super::shared::{create_progress_bar, print_summary};
use crate::app::adapters::filesystem::{ReportDirectory, ReportSource};
use crate::app::models::{ProcessingStats, ReportDate};
use crate::app::services::frame_writer::{dated_dataframe, write_frame};
use crate::app::services::report::EventReport;
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use polars::prelude::DataFrame;
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn run_convert(
    config: Config,
    args: &ConvertArgs,
    show_progress: bool,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();
    args.validate()?;

    let config = match args.format {
        Some(format) => config.with_output_format(format),
        None => config,
    };

    let directory = ReportDirectory::new(&config.reports_dir);
    let dates = select_dates(&directory, args)?;
    let (Some(first), Some(last)) = (dates.first().copied(), dates.last().copied()) else {
        bail!("No reports to convert in {}", config.reports_dir.display());
    };

    info!("Converting {} days from {} to {}", dates.len(), first, last);

    let pb = create_progress_bar(dates.len() as u64, show_progress);
    pb.set_message("Resolving reports");
    let (frame, mut stats) = collect_frames(&directory, &dates, &pb)?;
    pb.finish_with_message(format!("Resolved {} days", stats.days_processed));

    let Some(mut frame) = frame else {
        bail!("None of the {} selected days could be resolved", dates.len());
    };

    let output_path = args.output.clone().unwrap_or_else(|| {
        config.output_dir.join(format!(
            "events_{}_{}.{}",
            first.as_naive().format("%Y%m%d"),
            last.as_naive().format("%Y%m%d"),
            config.output_format.extension()
        ))
    });

    write_frame(&mut frame, &output_path, config.output_format)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    stats.output_path = Some(output_path);
    stats.processing_time_ms = start_time.elapsed().as_millis();
    if show_progress {
        print_summary(&stats);
    }
    Ok(stats)
}

/// Dates to convert
///
/// With both bounds, every calendar day between them. Otherwise the
/// discovered reports that fall inside whatever bounds were given.
pub fn select_dates(directory: &ReportDirectory, args: &ConvertArgs) -> Result<Vec<ReportDate>> {
    if let (Some(from), Some(to)) = (args.from_date, args.to_date) {
        return Ok(date_range(from, to));
    }

    let discovered = directory.discover()?;
    Ok(discovered
        .into_iter()
        .map(|(date, _)| date)
        .filter(|date| args.includes(date.as_naive()))
        .collect())
}

/// Every day from `from` to `to`, inclusive
pub fn date_range(from: NaiveDate, to: NaiveDate) -> Vec<ReportDate> {
    let mut dates = Vec::new();
    let mut current = Some(ReportDate::from(from));
    while let Some(date) = current.filter(|d| d.as_naive() <= to) {
        dates.push(date);
        current = date.next();
    }
    dates
}

/// Resolve each day and stack the dated frames
///
/// Returns `None` for the frame when no day resolved.
pub fn collect_frames<S>(
    source: &S,
    dates: &[ReportDate],
    pb: &ProgressBar,
) -> Result<(Option<DataFrame>, ProcessingStats)>
where
    S: ReportSource + ?Sized,
{
    let mut stats = ProcessingStats::default();
    let mut combined: Option<DataFrame> = None;

    for &date in dates {
        match EventReport::load(source, date) {
            Ok(report) => {
                let frame = dated_dataframe(date, report.records())?;
                debug!("{}: {} records", date, frame.height());
                stats.days_processed += 1;
                stats.total_records += frame.height();
                match combined.as_mut() {
                    Some(all) => {
                        all.vstack_mut(&frame)?;
                    }
                    None => combined = Some(frame),
                }
            }
            Err(e) => {
                warn!("Skipping {}: {}", date, e);
                stats.days_failed += 1;
            }
        }
        pb.inc(1);
    }

    if let Some(all) = combined.as_mut() {
        all.as_single_chunk();
    }

    Ok((combined, stats))
}
