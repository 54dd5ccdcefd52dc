//! Three-role sign resolution for a query moment.
//!
//! A calendar-day solar sign is advanced by elapsed time since sunrise:
//! lagna every 120 minutes, udaya every 90 minutes. Arudha mixes the
//! weekday with 150-minute slots and is never allowed to equal udaya.

use chrono::{Datelike, NaiveDate};
use jamakkol_time::{ClockTime, UtcOffset, parse_date};
use serde::Serialize;
use tracing::{debug, warn};

use crate::rashi::Rashi;
use crate::riseset::sun_times;
use crate::riseset_types::{FALLBACK_SUNRISE_HOURS, GeoLocation};
use crate::vaar::Vaar;

/// Month and day on which the solar sign is Mesha.
const SUN_SIGN_ANCHOR: (u32, u32) = (4, 14);

/// Mean days spent by the sun in one sign.
const DAYS_PER_SIGN: f64 = 30.44;

const LAGNA_PERIOD_MIN: f64 = 120.0;
const UDAYA_PERIOD_MIN: f64 = 90.0;
const ARUDHA_SLOT_MIN: f64 = 150.0;

/// Arudha steps per weekday and per 150-minute slot.
const ARUDHA_WEEKDAY_STEP: i64 = 4;
const ARUDHA_SLOT_STEP: i64 = 7;

/// Signs assigned to the three roles at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AstroSnapshot {
    /// Ascendant-like role.
    pub lagna: Rashi,
    /// Rising role; its lord speaks for the home side.
    pub udaya: Rashi,
    /// Fixed role; its lord speaks for the away side. Always differs from `udaya`.
    pub arudha: Rashi,
}

impl AstroSnapshot {
    /// Used when the date or time is missing: (1, 1, 7).
    pub const DEFAULT: Self = Self {
        lagna: Rashi::Mesha,
        udaya: Rashi::Mesha,
        arudha: Rashi::Tula,
    };
}

/// Solar sign for a calendar date, stepping one sign per 30.44 days from 14 April.
pub fn sun_rashi(date: NaiveDate) -> Rashi {
    let days = NaiveDate::from_ymd_opt(date.year(), SUN_SIGN_ANCHOR.0, SUN_SIGN_ANCHOR.1)
        .map_or(0, |anchor| date.signed_duration_since(anchor).num_days());
    Rashi::from_cycle((days as f64 / DAYS_PER_SIGN).floor() as i64)
}

/// Minutes from sunrise to `time`, in [0, 1440). Times before sunrise count from the previous sunrise.
pub fn minutes_since_sunrise(time: ClockTime, sunrise_hours: f64) -> f64 {
    let mut diff = time.decimal_hours() - sunrise_hours;
    if diff < 0.0 {
        diff += 24.0;
    }
    diff * 60.0
}

/// Resolve the three roles given the local sunrise in decimal hours.
pub fn resolve_signs(date: NaiveDate, time: ClockTime, sunrise_hours: f64) -> AstroSnapshot {
    let base = sun_rashi(date);
    let elapsed = minutes_since_sunrise(time, sunrise_hours);
    let steps = |period: f64| (elapsed / period).floor() as i64;

    let lagna = Rashi::from_cycle(base.index() as i64 + steps(LAGNA_PERIOD_MIN));
    let udaya = Rashi::from_cycle(base.index() as i64 + steps(UDAYA_PERIOD_MIN));

    let weekday = Vaar::from_date(date).index() as i64;
    let mut arudha = Rashi::from_cycle(
        weekday * ARUDHA_WEEKDAY_STEP + steps(ARUDHA_SLOT_MIN) * ARUDHA_SLOT_STEP,
    );
    if arudha == udaya {
        arudha = arudha.next();
    }

    debug!(
        %date,
        %time,
        sun = base.number(),
        elapsed_min = elapsed,
        lagna = lagna.number(),
        udaya = udaya.number(),
        arudha = arudha.number(),
        "resolved signs"
    );
    AstroSnapshot {
        lagna,
        udaya,
        arudha,
    }
}

/// Resolve the three roles, computing sunrise from `location` (06:00 when absent).
pub fn resolve_signs_at(
    date: NaiveDate,
    time: ClockTime,
    location: Option<&GeoLocation>,
    offset: UtcOffset,
) -> AstroSnapshot {
    let sunrise = location.map_or(FALLBACK_SUNRISE_HOURS, |loc| {
        sun_times(date, loc, offset).sunrise
    });
    resolve_signs(date, time, sunrise)
}

/// Resolve from raw `YYYY-MM-DD` / `HH:MM` input.
///
/// Missing or unparseable input yields [`AstroSnapshot::DEFAULT`] rather than an error.
pub fn resolve_signs_from_input(
    date: &str,
    time: &str,
    location: Option<&GeoLocation>,
    offset: UtcOffset,
) -> AstroSnapshot {
    if date.trim().is_empty() || time.trim().is_empty() {
        warn!("date or time missing, using default signs");
        return AstroSnapshot::DEFAULT;
    }
    match (parse_date(date), ClockTime::parse(time)) {
        (Ok(d), Ok(t)) => resolve_signs_at(d, t, location, offset),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "unreadable date or time, using default signs");
            AstroSnapshot::DEFAULT
        }
    }
}
