//! Vaar (weekday).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in order (index 0 = Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivaar => 0,
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
        }
    }

    /// Civil weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        ALL_VAARS[date.weekday().num_days_from_sunday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn indices_sequential() {
        for (i, v) in ALL_VAARS.iter().enumerate() {
            assert_eq!(v.index() as usize, i);
        }
    }

    #[test]
    fn equinox_2024_is_wednesday() {
        assert_eq!(Vaar::from_date(date(2024, 3, 20)), Vaar::Budhvaar);
    }

    #[test]
    fn known_sunday() {
        assert_eq!(Vaar::from_date(date(2024, 3, 17)), Vaar::Ravivaar);
        assert_eq!(Vaar::from_date(date(2024, 3, 17)).english_name(), "Sunday");
    }

    #[test]
    fn consecutive_days_advance() {
        let start = date(2025, 1, 1);
        for offset in 0..14u64 {
            let d = start + chrono::Days::new(offset);
            let expected = (Vaar::from_date(start).index() as u64 + offset) % 7;
            assert_eq!(Vaar::from_date(d).index() as u64, expected);
        }
    }
}
