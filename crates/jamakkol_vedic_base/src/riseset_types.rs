//! Types for sunrise/sunset calculations.

use serde::Serialize;

use jamakkol_time::format_decimal_hours;

use crate::error::VedicError;
use crate::util::normalize_24;

/// Fallback sunrise (decimal hours) for polar days/nights and missing locations.
pub const FALLBACK_SUNRISE_HOURS: f64 = 6.0;

/// Fallback sunset (decimal hours) for polar days/nights.
pub const FALLBACK_SUNSET_HOURS: f64 = 18.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location without range checks.
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Local sunrise and sunset for one calendar day, in decimal hours [0, 24).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunTimes {
    pub sunrise: f64,
    pub sunset: f64,
    /// True when the fixed 06:00/18:00 pair was substituted because the
    /// sun never rises or never sets at this latitude and date.
    pub polar_fallback: bool,
}

impl SunTimes {
    /// The fixed 06:00/18:00 pair.
    pub const FALLBACK: Self = Self {
        sunrise: FALLBACK_SUNRISE_HOURS,
        sunset: FALLBACK_SUNSET_HOURS,
        polar_fallback: true,
    };

    /// Hours from sunrise to sunset, measured forward around the clock.
    pub fn day_length_hours(&self) -> f64 {
        normalize_24(self.sunset - self.sunrise)
    }

    /// Hours from sunset to the next sunrise.
    pub fn night_length_hours(&self) -> f64 {
        24.0 - self.day_length_hours()
    }

    /// Sunrise as `HH:MM`.
    pub fn sunrise_label(&self) -> String {
        format_decimal_hours(self.sunrise)
    }

    /// Sunset as `HH:MM`.
    pub fn sunset_label(&self) -> String {
        format_decimal_hours(self.sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_valid() {
        let loc = GeoLocation::checked(13.0827, 80.2707).unwrap();
        assert!((loc.latitude_rad() - 13.0827_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(GeoLocation::checked(91.0, 0.0).is_err());
        assert!(GeoLocation::checked(0.0, -181.0).is_err());
        assert!(GeoLocation::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn fallback_is_twelve_hour_day() {
        let s = SunTimes::FALLBACK;
        assert!((s.day_length_hours() - 12.0).abs() < 1e-12);
        assert_eq!(s.sunrise_label(), "06:00");
        assert_eq!(s.sunset_label(), "18:00");
    }

    #[test]
    fn day_length_wraps_when_sunset_reads_earlier() {
        // Sunrise 22:00, sunset 10:00 local (location far from its zone meridian)
        let s = SunTimes {
            sunrise: 22.0,
            sunset: 10.0,
            polar_fallback: false,
        };
        assert!((s.day_length_hours() - 12.0).abs() < 1e-12);
        assert!((s.night_length_hours() - 12.0).abs() < 1e-12);
    }
}
