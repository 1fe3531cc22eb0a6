//! Constants used throughout the crate
//!
//! This module centralizes format patterns and the Korean unit labels used
//! when rendering durations, to improve maintainability and consistency.

/// Standard calendar-date format (`2025-01-15`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Standard timestamp format (`2025-01-15T09:30:00`)
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Shape a calendar-date string must have before it is parsed
pub const DATE_SHAPE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

// Korean duration unit suffixes, attached directly after the number
// (e.g. "3일" for three days)
pub const UNIT_YEARS: &str = "년";
pub const UNIT_MONTHS: &str = "개월";
pub const UNIT_DAYS: &str = "일";
pub const UNIT_HOURS: &str = "시간";
pub const UNIT_MINUTES: &str = "분";
pub const UNIT_SECONDS: &str = "초";
