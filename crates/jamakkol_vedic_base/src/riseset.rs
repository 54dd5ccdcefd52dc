//! Sunrise/sunset from a declination and equation-of-time approximation.
//!
//! Closed-form calendar-day model: no ephemeris, no refraction, no
//! iteration. Declination and the equation of time are both sinusoids of
//! the same annual phase angle `B = 360/365 * (day_of_year - 81)` degrees.
//! The hour angle at the horizon is `H = acos(-tan(lat) * tan(dec))`.

use chrono::NaiveDate;
use jamakkol_time::{UtcOffset, day_of_year};
use tracing::{debug, warn};

use crate::riseset_types::{GeoLocation, SunTimes};
use crate::util::normalize_24;

/// Maximum solar declination (obliquity) used by the model, degrees.
const OBLIQUITY_DEG: f64 = 23.45;

/// Day-of-year offset placing the phase angle at zero near the March equinox.
const EQUINOX_DAY_OFFSET: f64 = 81.0;

/// Annual phase angle in radians for a 1-based day of year.
fn annual_phase_rad(doy: u32) -> f64 {
    (360.0 / 365.0 * (doy as f64 - EQUINOX_DAY_OFFSET)).to_radians()
}

/// Approximate solar declination in degrees.
pub fn solar_declination_deg(doy: u32) -> f64 {
    OBLIQUITY_DEG * annual_phase_rad(doy).sin()
}

/// Approximate equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_min(doy: u32) -> f64 {
    let b = annual_phase_rad(doy);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Local sunrise and sunset for a date and location.
///
/// `offset` is the caller's UTC offset in effect on `date`. Results are
/// wrapped into [0, 24). When the sun does not cross the horizon (polar day
/// or night) the fixed 06:00/18:00 pair is returned with `polar_fallback` set.
pub fn sun_times(date: NaiveDate, location: &GeoLocation, offset: UtcOffset) -> SunTimes {
    let doy = day_of_year(date);
    let declination = solar_declination_deg(doy);
    let eot = equation_of_time_min(doy);

    let cos_h = -location.latitude_rad().tan() * declination.to_radians().tan();
    if !(-1.0..=1.0).contains(&cos_h) {
        warn!(
            %date,
            latitude = location.latitude_deg,
            cos_h,
            "sun does not cross the horizon, using 06:00/18:00 fallback"
        );
        return SunTimes::FALLBACK;
    }

    let half_day_hours = cos_h.acos().to_degrees() / 15.0;
    let correction = -location.longitude_deg / 15.0 - eot / 60.0 + offset.hours();

    let times = SunTimes {
        sunrise: normalize_24(12.0 - half_day_hours + correction),
        sunset: normalize_24(12.0 + half_day_hours + correction),
        polar_fallback: false,
    };
    debug!(
        %date,
        doy,
        declination,
        eot,
        sunrise = times.sunrise,
        sunset = times.sunset,
        "computed sun times"
    );
    times
}
