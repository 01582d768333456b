//! Tabular output of event records
//!
//! Converts assembled records into a Polars DataFrame with the report's
//! column names and writes frames to CSV or Parquet. Absent values become
//! nulls.

use crate::app::models::{ActiveRegion, EventRecord, ReportDate};
use crate::config::OutputFormat;
use crate::constants::columns;
use crate::error::Result;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

fn record_columns(records: &[EventRecord]) -> Vec<Column> {
    let text = |name: &str, get: fn(&EventRecord) -> &str| {
        Column::new(name.into(), records.iter().map(get).collect::<Vec<&str>>())
    };
    let optional = |name: &str, get: fn(&EventRecord) -> Option<&str>| {
        Column::new(
            name.into(),
            records.iter().map(get).collect::<Vec<Option<&str>>>(),
        )
    };

    vec![
        text(columns::EVENT, |r| r.event.as_str()),
        text(columns::BEGIN, |r| r.begin.as_str()),
        text(columns::MAX, |r| r.max.as_str()),
        text(columns::END, |r| r.end.as_str()),
        text(columns::OBSERVATORY, |r| r.observatory.as_str()),
        optional(columns::QUALITY, |r| r.quality.as_deref()),
        optional(columns::TYPE, |r| r.kind.as_deref()),
        optional(columns::LOCATION, |r| r.location.as_deref()),
        optional(columns::PARTICULARS, |r| r.particulars.as_deref()),
        optional(columns::REGION, |r| r.region.as_ref().map(ActiveRegion::as_str)),
    ]
}

/// Records as a DataFrame, one row per record, in record order
pub fn records_to_dataframe(records: &[EventRecord]) -> Result<DataFrame> {
    Ok(DataFrame::new(record_columns(records))?)
}

/// Records as a DataFrame with a leading `date` column
pub fn dated_dataframe(date: ReportDate, records: &[EventRecord]) -> Result<DataFrame> {
    let stamp = date.to_string();
    let mut frame_columns = vec![Column::new(
        columns::DATE.into(),
        vec![stamp.as_str(); records.len()],
    )];
    frame_columns.extend(record_columns(records));
    Ok(DataFrame::new(frame_columns)?)
}

/// Write a frame to `path`, creating parent directories as needed
pub fn write_frame(df: &mut DataFrame, path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    match format {
        OutputFormat::Csv => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
        OutputFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(df)?;
        }
    }

    debug!(
        "Wrote {} rows to {} ({:?})",
        df.height(),
        path.display(),
        format
    );
    Ok(())
}
