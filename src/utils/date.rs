//! Date formatting, comparison and arithmetic helpers
//!
//! This module is the main entry point of the crate: a small set of
//! locale-aware (Korean) operations over calendar dates and timestamps,
//! each a thin wrapper around chrono.
//!
//! Dates are accepted either as native chrono values or as `YYYY-MM-DD` /
//! `YYYY-MM-DDTHH:MM:SS` strings; see [`DateInput`].

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DATETIME_FORMAT, DATE_FORMAT, DATE_SHAPE_PATTERN};
use crate::error::{DateError, Result};
use crate::utils::duration::DurationParts;

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DATE_SHAPE_PATTERN).expect("date shape pattern is valid"));

/// A date argument in any of the interchangeable representations callers use:
/// a calendar date, a full timestamp, or a `YYYY-MM-DD` /
/// `YYYY-MM-DDTHH:MM:SS` string.
///
/// String inputs are parsed lazily; parse failures surface as
/// [`DateError::Parse`] from the operation that received them.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(&'a str),
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl DateInput<'_> {
    /// Resolve to a timestamp; plain dates resolve to midnight.
    pub fn resolve(self) -> Result<NaiveDateTime> {
        match self {
            Self::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            Self::DateTime(datetime) => Ok(datetime),
            Self::Text(text) => parse_text(text),
        }
    }
}

/// Parse a date string, trying the timestamp format first and falling back
/// to the plain calendar-date format.
fn parse_text(text: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Ok(datetime);
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|source| DateError::Parse {
            input: text.to_string(),
            source,
        })
}

/// Check whether `text` is a valid `YYYY-MM-DD` calendar date.
///
/// The string must match the exact shape and parse to a real date
/// (so `2024-13-01` is rejected). Invalid inputs are reported with a
/// warning and return `false`; this function never fails.
pub fn is_date_format(text: &str) -> bool {
    if DATE_SHAPE.is_match(text) && NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok() {
        return true;
    }

    log::warn!("{text}는 날짜형식이 아닙니다.");
    false
}

/// Format a date with the given strftime pattern, rendering month and
/// weekday names in Korean. Numeric fields are unaffected by the locale.
///
/// Patterns with unknown specifiers are rejected with
/// [`DateError::Pattern`] rather than being handed to chrono, whose
/// rendering would otherwise fail mid-`Display`.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>, pattern: &str) -> Result<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateError::Pattern(pattern.to_string()));
    }

    let datetime = date.into().resolve()?;
    Ok(datetime
        .and_utc()
        .format_localized(pattern, Locale::ko_KR)
        .to_string())
}

/// Format a date with the standard `YYYY-MM-DD` pattern.
pub fn format_date_default<'a>(date: impl Into<DateInput<'a>>) -> Result<String> {
    format_date(date, DATE_FORMAT)
}

/// Current local wall-clock moment.
pub fn today() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Absolute calendar-day difference between two dates, ignoring
/// time-of-day. Symmetric in its arguments.
pub fn distance_date<'a, 'b>(
    start: impl Into<DateInput<'a>>,
    end: impl Into<DateInput<'b>>,
) -> Result<u64> {
    let start = start.into().resolve()?.date();
    let end = end.into().resolve()?.date();
    Ok((end - start).num_days().unsigned_abs())
}

/// Date `offset` days after (or, for negative offsets, before) the current
/// local moment.
pub fn days_from_today(offset: i64) -> Result<NaiveDateTime> {
    day_after(today(), offset)
}

/// Date `offset` days after (or, for negative offsets, before) `base`.
pub fn day_after<'a>(base: impl Into<DateInput<'a>>, offset: i64) -> Result<NaiveDateTime> {
    let base = base.into().resolve()?;
    let delta = Duration::try_days(offset)
        .ok_or_else(|| DateError::OutOfRange(format!("offset of {offset} days")))?;
    base.checked_add_signed(delta)
        .ok_or_else(|| DateError::OutOfRange(format!("{base} plus {offset} days")))
}

/// Whether `base` is strictly after `target`.
pub fn is_after_date<'a, 'b>(
    base: impl Into<DateInput<'a>>,
    target: impl Into<DateInput<'b>>,
) -> Result<bool> {
    Ok(base.into().resolve()? > target.into().resolve()?)
}

/// Whether `base` is strictly before `target`.
pub fn is_before_date<'a, 'b>(
    base: impl Into<DateInput<'a>>,
    target: impl Into<DateInput<'b>>,
) -> Result<bool> {
    Ok(base.into().resolve()? < target.into().resolve()?)
}

/// Korean sentence describing the interval from `base` to `target`,
/// broken into years, months, days, hours, minutes and seconds with
/// zero-valued components omitted (e.g. `"1일 1시간"`).
///
/// The magnitude is rendered regardless of argument order; an empty
/// interval yields an empty string.
pub fn remain_full_time<'a, 'b>(
    base: impl Into<DateInput<'a>>,
    target: impl Into<DateInput<'b>>,
) -> Result<String> {
    let base = base.into().resolve()?;
    let target = target.into().resolve()?;
    Ok(DurationParts::between(base, target).to_string())
}

/// Last calendar day of the month containing `base`.
pub fn end_date_of_month<'a>(base: impl Into<DateInput<'a>>) -> Result<NaiveDate> {
    let date = base.into().resolve()?.date();
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };

    next_month
        .and_then(|first| first.pred_opt())
        .ok_or_else(|| DateError::OutOfRange(format!("end of month for {date}")))
}
