//! Sunrise/sunset scenarios against known seasonal behaviour.

use jamakkol_time::{NaiveDate, UtcOffset};
use jamakkol_vedic_base::{GeoLocation, SunTimes, find_site, sun_times};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn equinox_at_null_island_is_six_to_six() {
    let s = sun_times(date(2024, 3, 20), &GeoLocation::new(0.0, 0.0), UtcOffset::ZERO);
    assert!(!s.polar_fallback);
    assert!(
        (s.sunrise - 6.0).abs() < 0.25,
        "sunrise = {}, expected ~06:00",
        s.sunrise
    );
    assert!(
        (s.sunset - 18.0).abs() < 0.25,
        "sunset = {}, expected ~18:00",
        s.sunset
    );
}

#[test]
fn chennai_sunrise_in_ist() {
    // Chennai sunrises fall between roughly 05:40 and 06:45 IST all year
    let chennai = find_site("Chennai").unwrap();
    let ist = UtcOffset::from_hours(5.5).unwrap();
    for (m, d) in [(1, 15), (4, 15), (7, 15), (10, 15)] {
        let s = sun_times(date(2024, m, d), &chennai.location, ist);
        assert!(
            (5.6..6.8).contains(&s.sunrise),
            "{m}-{d}: sunrise {}",
            s.sunrise_label()
        );
        assert!(
            (17.6..18.8).contains(&s.sunset),
            "{m}-{d}: sunset {}",
            s.sunset_label()
        );
    }
}

#[test]
fn southern_hemisphere_long_day_in_december() {
    let santiago = GeoLocation::new(-33.45, -70.67);
    let s = sun_times(date(2024, 12, 21), &santiago, UtcOffset::from_hours(-3.0).unwrap());
    assert!(s.day_length_hours() > 13.5, "{}", s.day_length_hours());
}

#[test]
fn arctic_summer_falls_back() {
    let tromso = GeoLocation::new(69.65, 18.96);
    let s = sun_times(date(2024, 6, 21), &tromso, UtcOffset::from_hours(2.0).unwrap());
    assert_eq!(s, SunTimes::FALLBACK);
}

#[test]
fn results_stay_in_day_range_for_every_site_and_month() {
    for site in jamakkol_vedic_base::PRESET_SITES {
        for m in 1..=12 {
            let s = sun_times(date(2025, m, 1), &site.location, UtcOffset::ZERO);
            assert!((0.0..24.0).contains(&s.sunrise), "{} {m}", site.name);
            assert!((0.0..24.0).contains(&s.sunset), "{} {m}", site.name);
        }
    }
}
