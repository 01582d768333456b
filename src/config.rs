//! Configuration management and validation.
//!
//! Provides the layered configuration used by the CLI: built-in defaults,
//! then environment variables, then command-line overrides.

use crate::constants::{APP_DIR_NAME, DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR, ENV_REPORTS_DIR};
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Supported tabular output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Snappy-compressed Apache Parquet
    #[default]
    Parquet,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

/// Global configuration for report processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<yyyy><mm><dd>events.txt` reports
    pub reports_dir: PathBuf,

    /// Directory converted frames are written to
    pub output_dir: PathBuf,

    /// Output format for converted frames
    pub output_format: OutputFormat,

    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reports_dir: Self::default_reports_dir(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_format: OutputFormat::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Default reports directory under the user data directory
    ///
    /// Falls back to `./reports` when no data directory is known.
    pub fn default_reports_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("reports"))
            .unwrap_or_else(|| PathBuf::from("reports"))
    }

    /// Load defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults overlaid with values from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_REPORTS_DIR).filter(|v| !v.is_empty()) {
            debug!("Reports directory from {}: {}", ENV_REPORTS_DIR, dir);
            config.reports_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            debug!("Output directory from {}: {}", ENV_OUTPUT_DIR, dir);
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    /// Set the reports directory
    pub fn with_reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reports_dir = dir.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<()> {
        if self.reports_dir.as_os_str().is_empty() {
            return Err(ReportError::Configuration {
                message: "reports directory must not be empty".to_string(),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ReportError::Configuration {
                message: "output directory must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
