//! Error types for match input parsing and the narrative seam.

use jamakkol_time::TimeError;
use jamakkol_vedic_base::VedicError;
use thiserror::Error;

/// Errors raised while assembling match details.
///
/// Scoring itself never fails; these come only from reading user input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// A team name was blank.
    #[error("{0} team name must not be empty")]
    EmptyTeamName(&'static str),
    /// Bad site, location or table lookup.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Bad date, time or UTC offset.
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Failure of the external narrative generator.
///
/// Always recovered by substituting fallback text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    /// The generator could not be reached or refused the request.
    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),
    /// The generator answered with something that is not the expected JSON object.
    #[error("malformed narrative response: {0}")]
    Malformed(String),
}
