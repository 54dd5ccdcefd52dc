//! Error types for Vedic base lookups.
//!
//! Only parsing boundaries produce these. Once a value is a `Graha`,
//! `Rashi` or `GeoLocation`, every calculation in this crate is total.

use jamakkol_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base parsing and lookups.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Key does not name one of the 9 grahas.
    #[error("unknown graha '{0}' (valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu)")]
    UnknownGraha(String),
    /// Rashi number outside 1..=12.
    #[error("rashi number {0} outside 1-12")]
    InvalidRashi(u8),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Site name not present in the catalogue.
    #[error("unknown site '{0}'")]
    UnknownSite(String),
    /// Label language not supported.
    #[error("unknown language '{0}' (valid: english, tamil)")]
    UnknownLanguage(String),
    /// Error from date/time parsing.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
