//! Vedic tables and calendar-day astronomy for jamakkol match prediction.
//!
//! This crate provides:
//! - The 9 grahas, 12 rashis and 7 vaars with English/Tamil labels
//! - Graha friendship and dignity tables
//! - Sunrise/sunset from a declination/equation-of-time approximation
//! - Three-role sign resolution (lagna, udaya, arudha)
//! - The 24-segment hora schedule
//! - A preset site catalogue and a cosmetic theme generator
//!
//! Every calculation here is a pure function of its inputs. Errors only
//! arise when parsing keys, numbers or coordinates.

pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod hora;
pub mod labels;
pub mod prasna;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod site;
pub mod theme;
pub mod util;
pub mod vaar;

pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashis_ruled_by};
pub use graha_relationships::{
    Dignity, DignityProfile, Relation, RelationRow, dignity_of, dignity_profile, relation_of,
    relation_row, vaar_lord,
};
pub use hora::{
    HORA_COUNT, HORA_SEQUENCE, Hora, HoraQuality, HoraSchedule, HoraSegment, current_hora_lord,
    daily_horas, hora_at,
};
pub use labels::Language;
pub use prasna::{
    AstroSnapshot, minutes_since_sunrise, resolve_signs, resolve_signs_at,
    resolve_signs_from_input, sun_rashi,
};
pub use rashi::{ALL_RASHIS, DistanceQuality, Rashi, distance_quality, house_distance};
pub use riseset::{equation_of_time_min, solar_declination_deg, sun_times};
pub use riseset_types::{FALLBACK_SUNRISE_HOURS, FALLBACK_SUNSET_HOURS, GeoLocation, SunTimes};
pub use site::{PRESET_SITES, Site, find_site, search_sites};
pub use theme::{MatchTheme, generate_match_theme};
pub use vaar::{ALL_VAARS, Vaar};
