//! Cyclic index helpers shared by the rashi and weekday tables.
//!
//! All wraparound arithmetic funnels through here so that sign stepping
//! and ruler rotation never hand-roll their own modulo.

/// Number of rashis in the zodiac cycle.
pub const RASHI_CYCLE: u8 = 12;

/// Number of days (and hora lords) in the weekly cycle.
pub const WEEK_CYCLE: u8 = 7;

/// Wrap a signed step count into `0..size`.
pub fn cycle_index(value: i64, size: u8) -> usize {
    value.rem_euclid(size as i64) as usize
}

/// Normalize decimal hours to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    let r = hours.rem_euclid(24.0);
    // rem_euclid rounds tiny negatives up to exactly 24.0
    if r >= 24.0 { 0.0 } else { r }
}
