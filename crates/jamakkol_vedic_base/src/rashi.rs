//! Rashi (zodiac sign) catalogue and cyclic sign arithmetic.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Signs are numbered 1..=12 at the
//! API boundary and ordered cyclically: the sign after Meena is Mesha.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::VedicError;
use crate::labels::Language;
use crate::util::{RASHI_CYCLE, cycle_index};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
///
/// Serializes as its 1-based sign number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (index 0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Tamil name of the rashi.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Mesha => "மேஷம்",
            Self::Vrishabha => "ரிஷபம்",
            Self::Mithuna => "மிதுனம்",
            Self::Karka => "கடகம்",
            Self::Simha => "சிம்மம்",
            Self::Kanya => "கன்னி",
            Self::Tula => "துலாம்",
            Self::Vrischika => "விருச்சிகம்",
            Self::Dhanu => "தனுசு",
            Self::Makara => "மகரம்",
            Self::Kumbha => "கும்பம்",
            Self::Meena => "மீனம்",
        }
    }

    /// Display name in the requested label set.
    pub const fn display_name(self, lang: Language) -> &'static str {
        lang.pick(self.western_name(), self.tamil_name())
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from its 1-based sign number.
    pub fn from_number(n: u8) -> Result<Self, VedicError> {
        match n {
            1..=12 => Ok(ALL_RASHIS[(n - 1) as usize]),
            _ => Err(VedicError::InvalidRashi(n)),
        }
    }

    /// Rashi at any signed 0-based cycle position, wrapped into the zodiac.
    pub fn from_cycle(position: i64) -> Self {
        ALL_RASHIS[cycle_index(position, RASHI_CYCLE)]
    }

    /// Sidereal degree range `[start, end)` covered by this sign.
    pub fn degree_range(self) -> (f64, f64) {
        let start = self.index() as f64 * 30.0;
        (start, start + 30.0)
    }

    /// The n-th rashi counted from this one (1 = same sign, 2 = next, 12 = previous).
    pub fn nth_from(self, offset: u8) -> Self {
        Self::from_cycle(self.index() as i64 + offset as i64 - 1)
    }

    /// The following sign, wrapping Meena to Mesha.
    pub fn next(self) -> Self {
        self.nth_from(2)
    }
}

impl From<Rashi> for u8 {
    fn from(r: Rashi) -> Self {
        r.number()
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Inclusive forward house count from `from` to `to` (1..=12).
///
/// The same sign is house 1; the sign just before `from` is house 12.
pub fn house_distance(from: Rashi, to: Rashi) -> u8 {
    cycle_index(to.index() as i64 - from.index() as i64, RASHI_CYCLE) as u8 + 1
}

/// Qualitative grading of a house distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceQuality {
    /// Trines: 1, 5, 9.
    VeryGood,
    /// 2, 3, 7, 11.
    Good,
    /// Kendras 4 and 10.
    Medium,
    /// Dusthanas: 6, 8, 12.
    Bad,
}

impl DistanceQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Medium => "Medium",
            Self::Bad => "Bad",
        }
    }
}

/// Grade a house distance. Distances outside 1..=12 wrap into the cycle.
pub fn distance_quality(distance: u8) -> DistanceQuality {
    match cycle_index(distance as i64 - 1, RASHI_CYCLE) + 1 {
        1 | 5 | 9 => DistanceQuality::VeryGood,
        2 | 3 | 7 | 11 => DistanceQuality::Good,
        4 | 10 => DistanceQuality::Medium,
        _ => DistanceQuality::Bad,
    }
}
