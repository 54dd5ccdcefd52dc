//! Value types produced by the dominance walk.

use chrono::NaiveDate;
use jamakkol_time::ClockTime;
use jamakkol_vedic_base::{Graha, Rashi};
use serde::Serialize;

/// Number of timeline segments per match.
pub const FLOW_SEGMENTS: usize = 8;

/// Match length covered by the timeline, in minutes.
pub const MATCH_MINUTES: f64 = 98.0;

/// Score both sides start from.
pub const BASE_SCORE: i32 = 50;

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Home,
    Away,
}

/// Classification of one timeline segment by its net score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// net > 3
    HomeGoalChance,
    /// 1 < net <= 3
    HomeControl,
    /// -1 <= net <= 1
    Balanced,
    /// -3 <= net < -1
    AwayControl,
    /// net < -3
    AwayGoalChance,
}

impl Phase {
    /// Side the segment belongs to; `None` for a balanced segment.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::HomeGoalChance | Self::HomeControl => Some(Side::Home),
            Self::Balanced => None,
            Self::AwayControl | Self::AwayGoalChance => Some(Side::Away),
        }
    }

    /// Presentation hint, e.g. for choosing a colour band.
    pub const fn style_hint(self) -> &'static str {
        match self {
            Self::HomeGoalChance => "home-goal-chance",
            Self::HomeControl => "home-control",
            Self::Balanced => "balanced",
            Self::AwayControl => "away-control",
            Self::AwayGoalChance => "away-goal-chance",
        }
    }

    /// Timeline text for this phase.
    pub fn describe(self, home_name: &str, away_name: &str) -> String {
        match self {
            Self::HomeGoalChance => format!("{} - GOAL CHANCE", home_name.to_uppercase()),
            Self::HomeControl => format!("{home_name} Control"),
            Self::Balanced => "Tactical Battle / Mixed Phase".to_string(),
            Self::AwayControl => format!("{away_name} Control"),
            Self::AwayGoalChance => format!("{} - GOAL CHANCE", away_name.to_uppercase()),
        }
    }
}

/// Points each side earns in one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SegmentScore {
    pub home: i32,
    pub away: i32,
}

impl SegmentScore {
    pub const fn net(self) -> i32 {
        self.home - self.away
    }
}

/// One evaluated segment of the match-flow walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowSegment {
    pub index: usize,
    /// Offset from kick-off in minutes.
    pub start_min: f64,
    pub end_min: f64,
    pub ruler: Graha,
    pub score: SegmentScore,
    pub phase: Phase,
}

/// Contribution of each scoring rule to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLedger {
    pub base: i32,
    pub day_lord: i32,
    pub distance: i32,
    pub hora: i32,
    pub flow: i32,
}

impl ScoreLedger {
    pub const fn raw_total(&self) -> i32 {
        self.base + self.day_lord + self.distance + self.hora + self.flow
    }

    /// Total floored at zero.
    pub const fn total(&self) -> u32 {
        let raw = self.raw_total();
        if raw < 0 { 0 } else { raw as u32 }
    }
}

/// One side of the contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contender {
    pub name: String,
    /// Sign speaking for this side.
    pub rashi: Rashi,
    /// Ruling graha of this side, normally the lord of `rashi`.
    pub lord: Graha,
}

/// Everything the dominance walk reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominanceInput {
    pub date: NaiveDate,
    pub kickoff: ClockTime,
    pub home: Contender,
    pub away: Contender,
    /// Lord of the hora containing kick-off.
    pub hora_lord: Graha,
}

/// One narrated timeline segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominanceEvent {
    /// Whole minutes from kick-off to the segment start.
    pub minute: u32,
    /// Clock window, `HH:MM - HH:MM`.
    pub window: String,
    pub side: Option<Side>,
    /// Owning team's name, or `Neutral`.
    pub team_name: String,
    pub ruler: Graha,
    pub ruler_code: &'static str,
    pub ruler_name: &'static str,
    pub description: String,
    pub phase: Phase,
    pub style_hint: &'static str,
    pub net: i32,
}

/// Declared result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Home,
    Away,
    Draw,
}

/// Final probabilities, winner and timeline of one prediction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionOutcome {
    pub home_probability: u8,
    /// Always `100 - home_probability`.
    pub away_probability: u8,
    pub home_score: u32,
    pub away_score: u32,
    pub verdict: Verdict,
    /// Winning team's name, or `Draw`.
    pub winner: String,
    pub home_ledger: ScoreLedger,
    pub away_ledger: ScoreLedger,
    pub events: [DominanceEvent; FLOW_SEGMENTS],
}
