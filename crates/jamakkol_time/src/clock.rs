//! 24-hour local clock time with minute precision.
//!
//! Provides `ClockTime`, the time-of-day representation used for match
//! kick-off times, hora boundaries and event windows.

use std::fmt::{Display, Formatter};

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Local time of day, `00:00`..=`23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Validated constructor.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::InvalidClockTime(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM` (or `HH:MM:SS`, seconds ignored).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| TimeError::InvalidClockTime(s.to_string()))?;
        Ok(Self {
            hour: time.hour(),
            minute: time.minute(),
        })
    }

    /// Minutes elapsed since midnight (0..1440).
    pub const fn minutes_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Build from minutes since midnight, wrapping into a single day.
    pub fn from_minutes_of_day(minutes: i64) -> Self {
        let m = minutes.rem_euclid(MINUTES_PER_DAY as i64) as u32;
        Self {
            hour: m / 60,
            minute: m % 60,
        }
    }

    /// Time of day as decimal hours, e.g. 16:30 -> 16.5.
    pub fn decimal_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Shift by a signed number of minutes with hour and day rollover.
    pub fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes_of_day(self.minutes_of_day() as i64 + minutes)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Format decimal hours as `HH:MM`.
///
/// Minutes are rounded and carried into the hour, and the hour is taken
/// mod 24. Non-finite input renders as `--:--`.
pub fn format_decimal_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    let total = (hours * 60.0).round() as i64;
    ClockTime::from_minutes_of_day(total).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hh_mm() {
        let t = ClockTime::parse("16:30").unwrap();
        assert_eq!(t, ClockTime { hour: 16, minute: 30 });
    }

    #[test]
    fn parse_with_seconds() {
        let t = ClockTime::parse("07:05:59").unwrap();
        assert_eq!(t, ClockTime { hour: 7, minute: 5 });
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("noon").is_err());
    }

    #[test]
    fn new_validates() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert!(ClockTime::new(24, 0).is_err());
        assert!(ClockTime::new(0, 60).is_err());
    }

    #[test]
    fn decimal_hours() {
        let t = ClockTime::new(16, 30).unwrap();
        assert!((t.decimal_hours() - 16.5).abs() < 1e-12);
    }

    #[test]
    fn add_minutes_rolls_over_hour() {
        let t = ClockTime::new(16, 50).unwrap().add_minutes(12);
        assert_eq!(t.to_string(), "17:02");
    }

    #[test]
    fn add_minutes_rolls_over_midnight() {
        let t = ClockTime::new(23, 30).unwrap().add_minutes(98);
        assert_eq!(t.to_string(), "01:08");
    }

    #[test]
    fn add_negative_minutes() {
        let t = ClockTime::MIDNIGHT.add_minutes(-15);
        assert_eq!(t.to_string(), "23:45");
    }

    #[test]
    fn format_decimal_basic() {
        assert_eq!(format_decimal_hours(6.5), "06:30");
        assert_eq!(format_decimal_hours(0.0), "00:00");
    }

    #[test]
    fn format_decimal_carries_rounded_minute() {
        // 5h 59.7m rounds to 06:00, never 05:60
        assert_eq!(format_decimal_hours(5.0 + 59.7 / 60.0), "06:00");
    }

    #[test]
    fn format_decimal_wraps_past_midnight() {
        assert_eq!(format_decimal_hours(25.25), "01:15");
    }

    #[test]
    fn format_decimal_nan() {
        assert_eq!(format_decimal_hours(f64::NAN), "--:--");
    }
}
