//! Nalja - Korean-locale date utilities built on chrono
//!
//! This library provides a small, fixed set of date helpers: format
//! validation, locale-aware formatting, day-difference computation, adding
//! days, before/after comparisons, human-readable remaining-time sentences,
//! and end-of-month lookup. Month and weekday names and duration sentences
//! render in Korean; numeric fields are locale-independent.
//!
//! # Modules
//!
//! * [`config`] - Formatting pattern configuration
//! * [`constants`] - Format patterns and Korean unit labels
//! * [`error`] - Error types for parsing and arithmetic
//! * [`logger`] - Optional stderr logging setup
//! * [`utils`] - The date and duration helpers themselves
//!
//! # Example
//!
//! ```
//! use nalja::utils::date;
//!
//! assert!(date::is_date_format("2024-01-15"));
//! assert_eq!(date::distance_date("2024-01-01", "2024-01-10").unwrap(), 9);
//! assert_eq!(
//!     date::remain_full_time("2024-01-01T00:00:00", "2024-01-02T01:00:00").unwrap(),
//!     "1일 1시간",
//! );
//! ```

/// Formatting pattern configuration
pub mod config;

/// Format patterns and Korean unit labels
pub mod constants;

/// Error types for date parsing and arithmetic
pub mod error;

/// Logging setup for diagnostics
pub mod logger;

/// Date and duration utility functions
pub mod utils;

// Re-export the common surface for convenient access
pub use config::FormatConfig;
pub use error::{DateError, Result};
pub use utils::date::{
    day_after, days_from_today, distance_date, end_date_of_month, format_date,
    format_date_default, is_after_date, is_before_date, is_date_format, remain_full_time, today,
    DateInput,
};
pub use utils::duration::DurationParts;
