//! Calendar-aware interval breakdown
//!
//! Splits the interval between two timestamps into whole years and months
//! (respecting actual month lengths), then days, hours, minutes and seconds,
//! and renders the result as a Korean sentence.

use std::fmt;

use chrono::{Datelike, Months, NaiveDateTime};

use crate::constants::{UNIT_DAYS, UNIT_HOURS, UNIT_MINUTES, UNIT_MONTHS, UNIT_SECONDS, UNIT_YEARS};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Breakdown of an interval into calendar units (years, months, days)
/// plus clock units (hours, minutes, seconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationParts {
    /// Break the interval between two timestamps into parts.
    ///
    /// The magnitude is computed regardless of argument order. Year and
    /// month counts follow the calendar: a month elapses when the same
    /// day-of-month (clamped to month end) and time-of-day is reached again.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };

        let mut total_months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        if total_months < 0 {
            total_months = 0;
        }

        // The field-wise month count overshoots when the end's day/time
        // falls earlier in its month than the start's; step back once.
        let mut total_months = total_months as u32;
        let mut anchor = start + Months::new(total_months);
        if anchor > end {
            total_months -= 1;
            anchor = start + Months::new(total_months);
        }

        let remainder = (end - anchor).num_seconds();

        Self {
            years: total_months / 12,
            months: total_months % 12,
            days: (remainder / SECS_PER_DAY) as u32,
            hours: (remainder % SECS_PER_DAY / SECS_PER_HOUR) as u32,
            minutes: (remainder % SECS_PER_HOUR / SECS_PER_MINUTE) as u32,
            seconds: (remainder % SECS_PER_MINUTE) as u32,
        }
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Renders the breakdown as a Korean sentence such as `"1년 3개월 2일"`.
/// Zero-valued components are omitted; an all-zero breakdown renders as
/// the empty string.
impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            (self.years, UNIT_YEARS),
            (self.months, UNIT_MONTHS),
            (self.days, UNIT_DAYS),
            (self.hours, UNIT_HOURS),
            (self.minutes, UNIT_MINUTES),
            (self.seconds, UNIT_SECONDS),
        ];

        let mut first = true;
        for (value, unit) in components {
            if value == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value}{unit}")?;
            first = false;
        }

        Ok(())
    }
}
