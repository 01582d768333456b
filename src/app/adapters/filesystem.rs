//! Report file access
//!
//! Locates `<dir>/<yyyy><mm><dd>events.txt` files and reads them into lines.
//! The pipeline only sees the [`ReportSource`] trait, so tests and callers
//! with reports already in memory can bypass the filesystem.

use crate::app::models::ReportDate;
use crate::constants::{REPORT_FILE_GLOB, REPORT_FILE_REGEX};
use crate::error::{ReportError, Result};
use glob::glob;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of daily report text
pub trait ReportSource {
    /// Lines of the report for `date`
    ///
    /// A missing report is [`ReportError::ReportNotFound`].
    fn read_report(&self, date: ReportDate) -> Result<Vec<String>>;
}

/// Reports stored as flat files in one directory
#[derive(Debug, Clone)]
pub struct ReportDirectory {
    dir: PathBuf,
}

impl ReportDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the report for `date` is expected at
    pub fn report_path(&self, date: ReportDate) -> PathBuf {
        self.dir.join(date.file_name())
    }

    /// All report files in the directory, sorted by date
    ///
    /// Files whose name matches the glob but not a real calendar date are
    /// skipped with a warning.
    pub fn discover(&self) -> Result<Vec<(ReportDate, PathBuf)>> {
        let discovery_error = |reason: String| ReportError::Discovery {
            dir: self.dir.clone(),
            reason,
        };

        let name_pattern = Regex::new(REPORT_FILE_REGEX).map_err(|e| discovery_error(e.to_string()))?;
        let pattern = self.dir.join(REPORT_FILE_GLOB);
        let pattern_str = pattern.to_string_lossy();

        debug!("Searching for reports with pattern: {}", pattern_str);

        let mut reports = Vec::new();
        for entry in glob(&pattern_str).map_err(|e| discovery_error(e.to_string()))? {
            let path = entry.map_err(|e| discovery_error(e.to_string()))?;
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(caps) = name_pattern.captures(name) else {
                continue;
            };

            // Captures are fixed-width digit runs
            let year = caps[1].parse().unwrap_or_default();
            let month = caps[2].parse().unwrap_or_default();
            let day = caps[3].parse().unwrap_or_default();

            match ReportDate::new(year, month, day) {
                Ok(date) => reports.push((date, path)),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        reports.sort_by(|a, b| a.0.cmp(&b.0));
        debug!("Found {} reports in {}", reports.len(), self.dir.display());
        Ok(reports)
    }
}

impl ReportSource for ReportDirectory {
    fn read_report(&self, date: ReportDate) -> Result<Vec<String>> {
        let path = self.report_path(date);
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReportError::ReportNotFound { path: path.clone() },
            _ => ReportError::Io(e),
        })?;

        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// Reports held in memory, keyed by date
#[derive(Debug, Clone, Default)]
pub struct InMemoryReports {
    reports: HashMap<ReportDate, String>,
}

impl InMemoryReports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, date: ReportDate, text: impl Into<String>) -> Self {
        self.insert(date, text);
        self
    }

    pub fn insert(&mut self, date: ReportDate, text: impl Into<String>) {
        self.reports.insert(date, text.into());
    }
}

impl ReportSource for InMemoryReports {
    fn read_report(&self, date: ReportDate) -> Result<Vec<String>> {
        self.reports
            .get(&date)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| ReportError::ReportNotFound {
                path: PathBuf::from(date.file_name()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_path_layout() {
        let source = ReportDirectory::new("/data/reports");
        let date = ReportDate::new(2002, 4, 9).unwrap();
        assert_eq!(
            source.report_path(date),
            PathBuf::from("/data/reports/20020409events.txt")
        );
    }

    #[test]
    fn test_read_report_lines() {
        let temp_dir = TempDir::new().unwrap();
        let date = ReportDate::new(2002, 4, 9).unwrap();
        fs::write(
            temp_dir.path().join("20020409events.txt"),
            ":Product: 20020409events.txt\n4000 0418 0426 0434 G10 5 XRA 1-8A C1.1 1.1E-03 9901\n",
        )
        .unwrap();

        let lines = ReportDirectory::new(temp_dir.path()).read_report(date).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("4000"));
    }

    #[test]
    fn test_missing_report_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let date = ReportDate::new(2002, 4, 9).unwrap();

        let err = ReportDirectory::new(temp_dir.path())
            .read_report(date)
            .unwrap_err();

        match err {
            ReportError::ReportNotFound { path } => {
                assert!(path.ends_with("20020409events.txt"));
            }
            other => panic!("expected ReportNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_sorts_and_skips_invalid_names() {
        let temp_dir = TempDir::new().unwrap();
        for name in [
            "20020410events.txt",
            "20020409events.txt",
            "20021340events.txt",
            "notes-events.txt",
            "20020411.txt",
        ] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let found = ReportDirectory::new(temp_dir.path()).discover().unwrap();
        let dates: Vec<String> = found.iter().map(|(d, _)| d.to_string()).collect();

        assert_eq!(dates, vec!["2002-04-09", "2002-04-10"]);
    }

    #[test]
    fn test_in_memory_reports() {
        let date = ReportDate::new(2002, 4, 9).unwrap();
        let source = InMemoryReports::new().with_report(date, "a\nb\n");

        assert_eq!(source.read_report(date).unwrap(), vec!["a", "b"]);
        assert!(matches!(
            source.read_report(date.previous().unwrap()),
            Err(ReportError::ReportNotFound { .. })
        ));
    }
}
