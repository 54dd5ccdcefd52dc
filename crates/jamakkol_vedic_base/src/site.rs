//! Built-in catalogue of match venues.
//!
//! A small fixed list used when no geocoder is available. Lookups are
//! case-insensitive.

use serde::Serialize;

use crate::error::VedicError;
use crate::riseset_types::GeoLocation;

/// A named venue with coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Site {
    pub name: &'static str,
    pub country: &'static str,
    pub location: GeoLocation,
}

/// Preset venues.
pub const PRESET_SITES: [Site; 8] = [
    Site {
        name: "Chennai",
        country: "India",
        location: GeoLocation::new(13.0827, 80.2707),
    },
    Site {
        name: "London",
        country: "UK",
        location: GeoLocation::new(51.5074, -0.1278),
    },
    Site {
        name: "Madrid",
        country: "Spain",
        location: GeoLocation::new(40.4168, -3.7038),
    },
    Site {
        name: "Manchester",
        country: "UK",
        location: GeoLocation::new(53.4808, -2.2426),
    },
    Site {
        name: "Barcelona",
        country: "Spain",
        location: GeoLocation::new(41.3851, 2.1734),
    },
    Site {
        name: "Paris",
        country: "France",
        location: GeoLocation::new(48.8566, 2.3522),
    },
    Site {
        name: "Munich",
        country: "Germany",
        location: GeoLocation::new(48.1351, 11.5820),
    },
    Site {
        name: "Milan",
        country: "Italy",
        location: GeoLocation::new(45.4642, 9.1900),
    },
];

/// Sites whose name contains `query` (case-insensitive). Empty query matches all.
pub fn search_sites(query: &str) -> Vec<&'static Site> {
    let needle = query.trim().to_lowercase();
    PRESET_SITES
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// Exact (case-insensitive) lookup by name.
pub fn find_site(name: &str) -> Result<&'static Site, VedicError> {
    PRESET_SITES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| VedicError::UnknownSite(name.to_string()))
}
