//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas are the closed set of bodies every table in this crate is
//! keyed by. Each table is an exhaustive `match`, so adding a graha fails
//! to compile until every table is extended.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::VedicError;
use crate::labels::Language;
use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    #[serde(rename = "SUN")]
    Surya,
    #[serde(rename = "MOON")]
    Chandra,
    #[serde(rename = "MARS")]
    Mangal,
    #[serde(rename = "MERCURY")]
    Buddh,
    #[serde(rename = "JUPITER")]
    Guru,
    #[serde(rename = "VENUS")]
    Shukra,
    #[serde(rename = "SATURN")]
    Shani,
    #[serde(rename = "RAHU")]
    Rahu,
    #[serde(rename = "KETU")]
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding the shadow nodes.
///
/// Also the weekday order (Sunday..Saturday) and the rotation used by the
/// match-flow walk.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English display name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Tamil display name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Surya => "சூரியன்",
            Self::Chandra => "சந்திரன்",
            Self::Mangal => "செவ்வாய்",
            Self::Buddh => "புதன்",
            Self::Guru => "குரு",
            Self::Shukra => "சுக்கிரன்",
            Self::Shani => "சனி",
            Self::Rahu => "ராகு",
            Self::Ketu => "கேது",
        }
    }

    /// Display name in the requested label set.
    pub const fn display_name(self, lang: Language) -> &'static str {
        lang.pick(self.english_name(), self.tamil_name())
    }

    /// Two-letter chart code ("Su", "Mo", ...).
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// Upper-case identifier used in payloads ("SUN", "MOON", ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Surya => "SUN",
            Self::Chandra => "MOON",
            Self::Mangal => "MARS",
            Self::Buddh => "MERCURY",
            Self::Guru => "JUPITER",
            Self::Shukra => "VENUS",
            Self::Shani => "SATURN",
            Self::Rahu => "RAHU",
            Self::Ketu => "KETU",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Rahu and Ketu are shadow bodies: no hora, no weekday, no own sign.
    pub const fn is_shadow(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Parse a graha from its key, English or Sanskrit name (case-insensitive).
    pub fn from_key(s: &str) -> Result<Self, VedicError> {
        match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Ok(Self::Surya),
            "moon" | "chandra" => Ok(Self::Chandra),
            "mars" | "mangal" => Ok(Self::Mangal),
            "mercury" | "buddh" => Ok(Self::Buddh),
            "jupiter" | "guru" => Ok(Self::Guru),
            "venus" | "shukra" => Ok(Self::Shukra),
            "saturn" | "shani" => Ok(Self::Shani),
            "rahu" => Ok(Self::Rahu),
            "ketu" => Ok(Self::Ketu),
            _ => Err(VedicError::UnknownGraha(s.to_string())),
        }
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Rashis ruled by a graha, in zodiac order. Empty for the shadow nodes.
pub fn rashis_ruled_by(graha: Graha) -> impl Iterator<Item = Rashi> {
    ALL_RASHIS
        .into_iter()
        .filter(move |&r| rashi_lord(r) == graha)
}
