//! End-to-end prediction pipeline.
//!
//! solar times -> sign snapshot -> hora lord -> side lords -> dominance
//! -> narrative -> theme. Every stage except the narrative is a pure
//! function of `MatchDetails`.

use chrono::NaiveDate;
use jamakkol_time::{ClockTime, UtcOffset, parse_date};
use jamakkol_vedic_base::{
    AstroSnapshot, GeoLocation, Graha, MatchTheme, Site, SunTimes, current_hora_lord,
    generate_match_theme, rashi_lord, resolve_signs_at, sun_times,
};
use serde::Serialize;
use tracing::info;

use crate::dominance::compute_dominance;
use crate::dominance_types::{Contender, DominanceInput, PredictionOutcome};
use crate::error::MatchError;
use crate::narrative::{Explanation, NarrativeFallbacks, NarrativeRequest, Narrator, explain};

/// Where and when a match is played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetails {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub kickoff: ClockTime,
    /// Venue name for display.
    pub venue: Option<String>,
    /// Without a location, sunrise is taken as 06:00 and the hora lord as the Sun.
    pub location: Option<GeoLocation>,
    pub utc_offset: UtcOffset,
}

impl MatchDetails {
    /// Details with no venue at UTC.
    pub fn new(
        home_team: &str,
        away_team: &str,
        date: NaiveDate,
        kickoff: ClockTime,
    ) -> Result<Self, MatchError> {
        let home_team = home_team.trim();
        let away_team = away_team.trim();
        if home_team.is_empty() {
            return Err(MatchError::EmptyTeamName("home"));
        }
        if away_team.is_empty() {
            return Err(MatchError::EmptyTeamName("away"));
        }
        Ok(Self {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            date,
            kickoff,
            venue: None,
            location: None,
            utc_offset: UtcOffset::ZERO,
        })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` input.
    pub fn parse(home_team: &str, away_team: &str, date: &str, time: &str) -> Result<Self, MatchError> {
        Self::new(home_team, away_team, parse_date(date)?, ClockTime::parse(time)?)
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Use a catalogue site for venue name and location.
    pub fn at_site(mut self, site: &Site) -> Self {
        self.venue = Some(format!("{}, {}", site.name, site.country));
        self.location = Some(site.location);
        self
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = offset;
        self
    }
}

/// Every intermediate value of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub details: MatchDetails,
    /// Absent when no location was given.
    pub sun: Option<SunTimes>,
    pub signs: AstroSnapshot,
    pub hora_lord: Graha,
    pub home: Contender,
    pub away: Contender,
    pub outcome: PredictionOutcome,
    pub explanation: Explanation,
    pub theme: MatchTheme,
}

/// Side lords are the lords of the udaya (home) and arudha (away) signs.
pub fn dominance_input(details: &MatchDetails, signs: &AstroSnapshot, hora_lord: Graha) -> DominanceInput {
    DominanceInput {
        date: details.date,
        kickoff: details.kickoff,
        home: Contender {
            name: details.home_team.clone(),
            rashi: signs.udaya,
            lord: rashi_lord(signs.udaya),
        },
        away: Contender {
            name: details.away_team.clone(),
            rashi: signs.arudha,
            lord: rashi_lord(signs.arudha),
        },
        hora_lord,
    }
}

/// Request payload for the narrative generator.
pub fn narrative_request(input: &DominanceInput, outcome: &PredictionOutcome) -> NarrativeRequest {
    NarrativeRequest {
        home_team: input.home.name.clone(),
        away_team: input.away.name.clone(),
        home_rashi: input.home.rashi.western_name(),
        home_lord: input.home.lord.english_name(),
        away_rashi: input.away.rashi.western_name(),
        away_lord: input.away.lord.english_name(),
        winner: outcome.winner.clone(),
        home_probability: outcome.home_probability,
        away_probability: outcome.away_probability,
    }
}

/// Run the whole pipeline.
///
/// The outcome is computed before `narrator` is consulted and does not
/// depend on it.
pub fn predict(
    details: &MatchDetails,
    narrator: &dyn Narrator,
    fallbacks: &NarrativeFallbacks,
) -> Prediction {
    let location = details.location.as_ref();
    let sun = location.map(|loc| sun_times(details.date, loc, details.utc_offset));
    let signs = resolve_signs_at(details.date, details.kickoff, location, details.utc_offset);
    let hora_lord = current_hora_lord(details.date, details.kickoff, location, details.utc_offset);

    let input = dominance_input(details, &signs, hora_lord);
    let outcome = compute_dominance(&input);
    info!(
        home = %details.home_team,
        away = %details.away_team,
        winner = %outcome.winner,
        home_probability = outcome.home_probability,
        "prediction computed"
    );

    let explanation = explain(narrator, &narrative_request(&input, &outcome), fallbacks);
    let theme = generate_match_theme(&details.date.to_string(), &details.kickoff.to_string());

    Prediction {
        details: details.clone(),
        sun,
        signs,
        hora_lord,
        home: input.home,
        away: input.away,
        outcome,
        explanation,
        theme,
    }
}
