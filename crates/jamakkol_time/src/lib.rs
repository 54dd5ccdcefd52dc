//! Calendar and clock-time primitives for the jamakkol engine.
//!
//! This crate provides:
//! - ISO calendar date parsing and day-of-year
//! - `ClockTime`, a 24-hour local time-of-day with minute precision
//! - `UtcOffset`, the caller-supplied offset in fractional hours
//! - Decimal-hour formatting (`HH:MM`)

pub mod calendar;
pub mod clock;
pub mod error;

pub use calendar::{UtcOffset, day_of_year, parse_date};
pub use clock::{ClockTime, MINUTES_PER_DAY, format_decimal_hours};
pub use error::TimeError;

/// Re-exported so callers don't need a direct chrono dependency for dates.
pub use chrono::NaiveDate;
