//! Scan command: list the reports available in the reports directory

use crate::app::adapters::filesystem::ReportDirectory;
use crate::app::models::ProcessingStats;
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

pub fn run_scan(config: &Config) -> Result<ProcessingStats> {
    let directory = ReportDirectory::new(&config.reports_dir);
    let reports = directory
        .discover()
        .with_context(|| format!("Failed to scan {}", config.reports_dir.display()))?;

    info!(
        "Found {} reports in {}",
        reports.len(),
        config.reports_dir.display()
    );

    println!(
        "{} {}",
        "Reports in".bright_green().bold(),
        config.reports_dir.display().to_string().bright_white()
    );

    if reports.is_empty() {
        println!("{}", "No <yyyy><mm><dd>events.txt files found".yellow());
        return Ok(ProcessingStats::default());
    }

    for (date, path) in &reports {
        // A report without its previous day cannot be resolved
        let resolvable = date
            .previous()
            .map(|prev| directory.report_path(prev).exists())
            .unwrap_or(false);
        let marker = if resolvable {
            "ok".bright_green()
        } else {
            "no previous day".bright_yellow()
        };
        println!(
            "  {}  {}  {}",
            date.to_string().bright_cyan(),
            path.display(),
            marker
        );
    }

    if let (Some((first, _)), Some((last, _))) = (reports.first(), reports.last()) {
        println!();
        println!("{} reports, {} to {}", reports.len(), first, last);
    }

    Ok(ProcessingStats::default())
}
