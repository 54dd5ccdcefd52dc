//! Hora (planetary hour) scheduling.
//!
//! The solar day is split into 12 equal day horas (sunrise to sunset) and
//! 12 equal night horas (sunset to next sunrise). Lords follow the fixed
//! 7-body hora sequence, starting from a weekday-dependent position.

use chrono::NaiveDate;
use jamakkol_time::{ClockTime, UtcOffset, format_decimal_hours};
use serde::Serialize;
use tracing::debug;

use crate::graha::Graha;
use crate::labels::Language;
use crate::riseset::sun_times;
use crate::riseset_types::{GeoLocation, SunTimes};
use crate::util::{WEEK_CYCLE, cycle_index, normalize_24};
use crate::vaar::Vaar;

/// Number of horas in one sunrise-to-sunrise day.
pub const HORA_COUNT: u8 = 24;

/// Horas per half (day or night).
pub const HORAS_PER_HALF: u8 = 12;

/// Lord of a planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hora {
    Surya,
    Shukra,
    Buddh,
    Chandra,
    Shani,
    Guru,
    Mangal,
}

/// Hora lords in rotation order.
pub const HORA_SEQUENCE: [Hora; 7] = [
    Hora::Surya,
    Hora::Shukra,
    Hora::Buddh,
    Hora::Chandra,
    Hora::Shani,
    Hora::Guru,
    Hora::Mangal,
];

/// Position in `HORA_SEQUENCE` of the first day hora, indexed by weekday (Sunday = 0).
const WEEKDAY_START: [u8; 7] = [0, 3, 6, 2, 5, 1, 4];

/// The first night hora is the 6th lord counted from the first day hora.
const NIGHT_START_OFFSET: u8 = 5;

impl Hora {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Shukra => "Shukra",
            Self::Buddh => "Buddh",
            Self::Chandra => "Chandra",
            Self::Shani => "Shani",
            Self::Guru => "Guru",
            Self::Mangal => "Mangal",
        }
    }

    /// Position in the hora sequence.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Shukra => 1,
            Self::Buddh => 2,
            Self::Chandra => 3,
            Self::Shani => 4,
            Self::Guru => 5,
            Self::Mangal => 6,
        }
    }

    /// The graha ruling this hora.
    pub const fn graha(self) -> Graha {
        match self {
            Self::Surya => Graha::Surya,
            Self::Shukra => Graha::Shukra,
            Self::Buddh => Graha::Buddh,
            Self::Chandra => Graha::Chandra,
            Self::Shani => Graha::Shani,
            Self::Guru => Graha::Guru,
            Self::Mangal => Graha::Mangal,
        }
    }

    pub const fn quality(self) -> HoraQuality {
        match self {
            Self::Surya => HoraQuality::Vigorous,
            Self::Shukra => HoraQuality::Beneficial,
            Self::Buddh => HoraQuality::Quick,
            Self::Chandra => HoraQuality::Gentle,
            Self::Shani => HoraQuality::Sluggish,
            Self::Guru => HoraQuality::Fruitful,
            Self::Mangal => HoraQuality::Aggressive,
        }
    }
}

/// Character of a planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HoraQuality {
    Vigorous,
    Gentle,
    Aggressive,
    Quick,
    Fruitful,
    Beneficial,
    Sluggish,
}

impl HoraQuality {
    pub const fn label(self, lang: Language) -> &'static str {
        match self {
            Self::Vigorous => lang.pick("Vigorous", "வீரியம்"),
            Self::Gentle => lang.pick("Gentle", "மென்மை"),
            Self::Aggressive => lang.pick("Aggressive", "ஆக்ரோஷம்"),
            Self::Quick => lang.pick("Quick", "வேகம்"),
            Self::Fruitful => lang.pick("Fruitful", "சுபம்"),
            Self::Beneficial => lang.pick("Beneficial", "நன்மை"),
            Self::Sluggish => lang.pick("Sluggish", "மந்தம்"),
        }
    }
}

/// Lord of the `index`-th hora (0..24) of the day starting on `vaar`.
///
/// Indices 0..12 are day horas, 12..24 night horas. Larger indices wrap.
pub fn hora_at(vaar: Vaar, index: u8) -> Hora {
    let index = index % HORA_COUNT;
    let day_start = WEEKDAY_START[vaar.index() as usize] as i64;
    let position = if index < HORAS_PER_HALF {
        day_start + index as i64
    } else {
        day_start + NIGHT_START_OFFSET as i64 + (index - HORAS_PER_HALF) as i64
    };
    HORA_SEQUENCE[cycle_index(position, WEEK_CYCLE)]
}

/// One planetary hour with local decimal-hour bounds in [0, 24).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraSegment {
    /// 0-based position in the day (0..24).
    pub index: u8,
    pub hora: Hora,
    pub is_day: bool,
    pub start_hours: f64,
    /// Less than `start_hours` when the segment crosses midnight.
    pub end_hours: f64,
}

impl HoraSegment {
    pub fn lord(&self) -> Graha {
        self.hora.graha()
    }

    pub fn quality(&self) -> HoraQuality {
        self.hora.quality()
    }

    /// Length in hours, measured forward across midnight.
    pub fn duration_hours(&self) -> f64 {
        normalize_24(self.end_hours - self.start_hours)
    }

    pub fn start_label(&self) -> String {
        format_decimal_hours(self.start_hours)
    }

    pub fn end_label(&self) -> String {
        format_decimal_hours(self.end_hours)
    }

    /// Whether local decimal hour `hours` falls in `[start, end)`, unwrapping midnight.
    pub fn contains(&self, hours: f64) -> bool {
        let start = self.start_hours;
        let mut end = self.end_hours;
        if end < start {
            end += 24.0;
        }
        let mut t = hours;
        if t < start && end > 24.0 {
            t += 24.0;
        }
        t >= start && t < end
    }
}

/// The 24 horas of one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraSchedule {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub sun: SunTimes,
    pub segments: [HoraSegment; 24],
}

impl HoraSchedule {
    /// Build the schedule from already computed sunrise/sunset.
    pub fn from_sun_times(date: NaiveDate, sun: SunTimes) -> Self {
        let vaar = Vaar::from_date(date);
        let segments = std::array::from_fn(|i| {
            let k = i as u8;
            HoraSegment {
                index: k,
                hora: hora_at(vaar, k),
                is_day: k < HORAS_PER_HALF,
                start_hours: boundary(&sun, k),
                end_hours: boundary(&sun, k + 1),
            }
        });
        Self {
            date,
            vaar,
            sun,
            segments,
        }
    }

    /// First segment containing `time`.
    pub fn segment_at(&self, time: ClockTime) -> Option<&HoraSegment> {
        let hours = time.decimal_hours();
        self.segments.iter().find(|s| s.contains(hours))
    }

    /// Index of the segment containing `time`.
    pub fn active_index(&self, time: ClockTime) -> Option<usize> {
        self.segment_at(time).map(|s| s.index as usize)
    }

    pub fn day_segments(&self) -> &[HoraSegment] {
        &self.segments[..HORAS_PER_HALF as usize]
    }

    pub fn night_segments(&self) -> &[HoraSegment] {
        &self.segments[HORAS_PER_HALF as usize..]
    }
}

/// Start of the `k`-th hora (k = 24 is the next sunrise).
fn boundary(sun: &SunTimes, k: u8) -> f64 {
    match k {
        0 | 24 => sun.sunrise,
        12 => sun.sunset,
        _ => {
            let day = sun.day_length_hours();
            let offset = if k < HORAS_PER_HALF {
                k as f64 * day / 12.0
            } else {
                day + (k - HORAS_PER_HALF) as f64 * (24.0 - day) / 12.0
            };
            normalize_24(sun.sunrise + offset)
        }
    }
}

/// Hora schedule for a date and location.
pub fn daily_horas(date: NaiveDate, location: &GeoLocation, offset: UtcOffset) -> HoraSchedule {
    HoraSchedule::from_sun_times(date, sun_times(date, location, offset))
}

/// Lord of the hora containing `time`. Without a location the Sun is assumed.
pub fn current_hora_lord(
    date: NaiveDate,
    time: ClockTime,
    location: Option<&GeoLocation>,
    offset: UtcOffset,
) -> Graha {
    let Some(location) = location else {
        return Graha::Surya;
    };
    let schedule = daily_horas(date, location, offset);
    let lord = schedule
        .segment_at(time)
        .map_or(Graha::Surya, HoraSegment::lord);
    debug!(%date, %time, lord = lord.name(), "current hora");
    lord
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    #[test]
    fn sequence_indices_match_position() {
        for (i, h) in HORA_SEQUENCE.iter().enumerate() {
            assert_eq!(h.index() as usize, i);
        }
    }

    #[test]
    fn first_hora_is_day_lord() {
        use crate::graha_relationships::vaar_lord;
        use crate::vaar::ALL_VAARS;
        for v in ALL_VAARS {
            assert_eq!(hora_at(v, 0).graha(), vaar_lord(v), "{}", v.name());
        }
    }

    #[test]
    fn night_starts_sixth_from_day_lord() {
        // Sunday: day starts Surya, night starts Guru
        assert_eq!(hora_at(Vaar::Ravivaar, 12), Hora::Guru);
        // Monday: Chandra then Shukra
        assert_eq!(hora_at(Vaar::Somvaar, 12), Hora::Shukra);
    }

    #[test]
    fn hora_at_wraps_index() {
        assert_eq!(hora_at(Vaar::Budhvaar, 24), hora_at(Vaar::Budhvaar, 0));
    }

    #[test]
    fn quality_labels() {
        assert_eq!(Hora::Shani.quality().label(Language::English), "Sluggish");
        assert_eq!(Hora::Surya.quality().label(Language::Tamil), "வீரியம்");
    }

    #[test]
    fn fallback_day_has_hour_long_horas() {
        let s = HoraSchedule::from_sun_times(date(2024, 3, 17), SunTimes::FALLBACK);
        assert!((s.segments[0].start_hours - 6.0).abs() < 1e-12);
        assert!((s.segments[11].end_hours - 18.0).abs() < 1e-12);
        assert!((s.segments[17].start_hours - 23.0).abs() < 1e-12);
        assert!((s.segments[18].start_hours - 0.0).abs() < 1e-12);
        for seg in &s.segments {
            assert!((seg.duration_hours() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn contains_handles_midnight_crossing() {
        let seg = HoraSegment {
            index: 17,
            hora: Hora::Surya,
            is_day: false,
            start_hours: 23.5,
            end_hours: 0.5,
        };
        assert!(seg.contains(23.75));
        assert!(seg.contains(0.25));
        assert!(!seg.contains(0.5));
        assert!(!seg.contains(12.0));
    }

    #[test]
    fn active_index_on_fallback_day() {
        // 2024-03-17 is a Sunday
        let s = HoraSchedule::from_sun_times(date(2024, 3, 17), SunTimes::FALLBACK);
        assert_eq!(s.active_index(hm(6, 0)), Some(0));
        assert_eq!(s.active_index(hm(12, 30)), Some(6));
        assert_eq!(s.active_index(hm(0, 0)), Some(18));
        assert_eq!(s.active_index(hm(5, 59)), Some(23));
        assert_eq!(s.segment_at(hm(6, 10)).unwrap().lord(), Graha::Surya);
    }

    #[test]
    fn no_location_defaults_to_sun() {
        assert_eq!(
            current_hora_lord(date(2024, 3, 20), hm(15, 0), None, UtcOffset::ZERO),
            Graha::Surya
        );
    }

    #[test]
    fn day_and_night_halves() {
        let s = HoraSchedule::from_sun_times(date(2024, 3, 20), SunTimes::FALLBACK);
        assert!(s.day_segments().iter().all(|h| h.is_day));
        assert!(s.night_segments().iter().all(|h| !h.is_day));
        assert_eq!(s.night_segments().len(), 12);
    }
}
