//! Calendar dates and UTC offsets.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::TimeError;

/// Largest civil UTC offset magnitude in hours (Line Islands is +14).
const MAX_OFFSET_HOURS: f64 = 14.0;

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// 1-based day of year (1 January = 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Local offset from UTC in fractional hours, east positive.
///
/// Supplied by the caller for the date in question (e.g. +5.5 for IST).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct UtcOffset {
    hours: f64,
}

impl UtcOffset {
    /// UTC itself.
    pub const ZERO: Self = Self { hours: 0.0 };

    /// Validated constructor; rejects non-finite values and |offset| > 14h.
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidUtcOffset(hours));
        }
        Ok(Self { hours })
    }

    /// Offset in fractional hours.
    pub fn hours(self) -> f64 {
        self.hours
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.hours < 0.0 { '-' } else { '+' };
        let total_minutes = (self.hours.abs() * 60.0).round() as u32;
        write!(f, "{sign}{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}
