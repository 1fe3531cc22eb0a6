//! Format configuration
//!
//! This module handles loading, parsing, and validation of the formatting
//! patterns callers may override. The locale itself is fixed to Korean and
//! is deliberately not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DATETIME_FORMAT, DATE_FORMAT};
use crate::error::Result as DateResult;
use crate::utils::date::{self, DateInput};

/// Immutable formatting configuration. Construct once and pass by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// strftime pattern for calendar dates
    pub date_format: String,
    /// strftime pattern for full timestamps
    pub datetime_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_format: DATE_FORMAT.to_string(),
            datetime_format: DATETIME_FORMAT.to_string(),
        }
    }
}

impl FormatConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        Self::load_from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: FormatConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values by round-tripping a probe date through
    /// each pattern, rejecting patterns chrono cannot handle.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = chrono::NaiveDate::parse_from_str("2025-01-01", &self.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.date_format, e);
        }

        if let Err(e) =
            chrono::NaiveDateTime::parse_from_str("2025-01-01T12:00:00", &self.datetime_format)
        {
            anyhow::bail!("Invalid datetime_format '{}': {}", self.datetime_format, e);
        }

        Ok(())
    }

    /// Format a date with the configured calendar-date pattern.
    pub fn format_date<'a>(&self, input: impl Into<DateInput<'a>>) -> DateResult<String> {
        date::format_date(input, &self.date_format)
    }

    /// Format a date with the configured timestamp pattern.
    pub fn format_datetime<'a>(&self, input: impl Into<DateInput<'a>>) -> DateResult<String> {
        date::format_date(input, &self.datetime_format)
    }
}
