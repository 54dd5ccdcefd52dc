//! Dominance scoring: fixed bonuses, the 8-segment match-flow walk and
//! the final probability split.
//!
//! Both sides start at 50. The day lord, the house distance between the
//! two signs and the current hora lord adjust the scores once each. The
//! flow walk then rotates through the seven classical grahas from the
//! hora lord, scoring each segment independently; segment totals are
//! summed separately and added at the end.

use jamakkol_vedic_base::util::{WEEK_CYCLE, cycle_index};
use jamakkol_vedic_base::{
    DistanceQuality, Graha, Relation, SAPTA_GRAHAS, Vaar, distance_quality, house_distance,
    relation_of, vaar_lord,
};
use tracing::debug;

use crate::dominance_types::{
    BASE_SCORE, DominanceEvent, DominanceInput, FLOW_SEGMENTS, FlowSegment, MATCH_MINUTES, Phase,
    PredictionOutcome, ScoreLedger, SegmentScore, Side, Verdict,
};

const DAY_LORD_BONUS: i32 = 5;
const STRONG_DISTANCE_BONUS: i32 = 15;
const MILD_DISTANCE_BONUS: i32 = 8;
const HORA_SAME_BONUS: i32 = 8;
const HORA_RELATION_POINTS: i32 = 5;
const SEGMENT_SAME_POINTS: i32 = 5;
const SEGMENT_RELATION_POINTS: i32 = 2;

/// Label recorded as the winner on a 50/50 split.
pub const DRAW_LABEL: &str = "Draw";

/// Team name given to balanced segments.
pub const NEUTRAL_LABEL: &str = "Neutral";

/// +5 when `lord` rules the weekday.
pub fn day_lord_points(lord: Graha, vaar: Vaar) -> i32 {
    if lord == vaar_lord(vaar) { DAY_LORD_BONUS } else { 0 }
}

/// (home, away) adjustment for the house distance from the home sign to the away sign.
pub fn distance_points(distance: u8) -> (i32, i32) {
    match distance_quality(distance) {
        DistanceQuality::VeryGood => (STRONG_DISTANCE_BONUS, 0),
        DistanceQuality::Good => (MILD_DISTANCE_BONUS, 0),
        DistanceQuality::Medium => (0, 0),
        DistanceQuality::Bad => (-STRONG_DISTANCE_BONUS, STRONG_DISTANCE_BONUS),
    }
}

/// Points a side earns from the current hora lord.
///
/// Ruling the hora outranks any relation, so it never also earns the friend bonus.
pub fn hora_points(lord: Graha, hora_lord: Graha) -> i32 {
    if lord == hora_lord {
        return HORA_SAME_BONUS;
    }
    relation_points(relation_of(lord, hora_lord), HORA_RELATION_POINTS)
}

/// Points a side earns in a segment ruled by `segment_lord`.
pub fn segment_points(lord: Graha, segment_lord: Graha) -> i32 {
    if lord == segment_lord {
        return SEGMENT_SAME_POINTS;
    }
    relation_points(relation_of(lord, segment_lord), SEGMENT_RELATION_POINTS)
}

fn relation_points(relation: Relation, weight: i32) -> i32 {
    match relation {
        Relation::Friend => weight,
        Relation::Neutral => 0,
        Relation::Enemy => -weight,
    }
}

/// Score one segment for both sides.
pub fn score_segment(home_lord: Graha, away_lord: Graha, segment_lord: Graha) -> SegmentScore {
    SegmentScore {
        home: segment_points(home_lord, segment_lord),
        away: segment_points(away_lord, segment_lord),
    }
}

/// Classify a segment's net (home minus away) score.
pub fn classify_net(net: i32) -> Phase {
    match net {
        n if n > 3 => Phase::HomeGoalChance,
        n if n > 1 => Phase::HomeControl,
        n if n >= -1 => Phase::Balanced,
        n if n >= -3 => Phase::AwayControl,
        _ => Phase::AwayGoalChance,
    }
}

/// Ruler of flow segment `index`, rotating from the hora lord.
///
/// Rahu and Ketu are not in the rotation; a shadow hora lord starts at the Sun.
pub fn segment_ruler(hora_lord: Graha, index: usize) -> Graha {
    let start = if hora_lord.is_shadow() {
        0
    } else {
        hora_lord.index() as usize
    };
    SAPTA_GRAHAS[cycle_index((start + index) as i64, WEEK_CYCLE)]
}

/// Evaluate all flow segments. Pure: no totals are touched.
pub fn walk_segments(
    home_lord: Graha,
    away_lord: Graha,
    hora_lord: Graha,
) -> [FlowSegment; FLOW_SEGMENTS] {
    let length = MATCH_MINUTES / FLOW_SEGMENTS as f64;
    std::array::from_fn(|index| {
        let ruler = segment_ruler(hora_lord, index);
        let score = score_segment(home_lord, away_lord, ruler);
        FlowSegment {
            index,
            start_min: index as f64 * length,
            end_min: (index + 1) as f64 * length,
            ruler,
            score,
            phase: classify_net(score.net()),
        }
    })
}

/// Sum flow points per side.
pub fn aggregate_flow(segments: &[FlowSegment]) -> SegmentScore {
    segments.iter().fold(SegmentScore::default(), |acc, s| SegmentScore {
        home: acc.home + s.score.home,
        away: acc.away + s.score.away,
    })
}

/// Home share of the combined clipped score, rounded. 50 when both are zero.
pub fn home_probability(home_score: u32, away_score: u32) -> u8 {
    let total = home_score + away_score;
    if total == 0 {
        return 50;
    }
    (home_score as f64 / total as f64 * 100.0).round() as u8
}

/// Score both sides without building the timeline.
pub fn score_ledgers(input: &DominanceInput) -> (ScoreLedger, ScoreLedger) {
    let vaar = Vaar::from_date(input.date);
    let (home_lord, away_lord) = (input.home.lord, input.away.lord);
    let (home_distance, away_distance) =
        distance_points(house_distance(input.home.rashi, input.away.rashi));
    let flow = aggregate_flow(&walk_segments(home_lord, away_lord, input.hora_lord));

    let home = ScoreLedger {
        base: BASE_SCORE,
        day_lord: day_lord_points(home_lord, vaar),
        distance: home_distance,
        hora: hora_points(home_lord, input.hora_lord),
        flow: flow.home,
    };
    let away = ScoreLedger {
        base: BASE_SCORE,
        day_lord: day_lord_points(away_lord, vaar),
        distance: away_distance,
        hora: hora_points(away_lord, input.hora_lord),
        flow: flow.away,
    };
    (home, away)
}

fn narrate_segment(input: &DominanceInput, segment: &FlowSegment) -> DominanceEvent {
    let start = input.kickoff.add_minutes(segment.start_min.floor() as i64);
    let end = input.kickoff.add_minutes(segment.end_min.floor() as i64);
    let side = segment.phase.side();
    let team_name = match side {
        Some(Side::Home) => input.home.name.clone(),
        Some(Side::Away) => input.away.name.clone(),
        None => NEUTRAL_LABEL.to_string(),
    };
    DominanceEvent {
        minute: segment.start_min.floor() as u32,
        window: format!("{start} - {end}"),
        side,
        team_name,
        ruler: segment.ruler,
        ruler_code: segment.ruler.short_code(),
        ruler_name: segment.ruler.english_name(),
        description: segment.phase.describe(&input.home.name, &input.away.name),
        phase: segment.phase,
        style_hint: segment.phase.style_hint(),
        net: segment.score.net(),
    }
}

/// Run the full dominance computation.
pub fn compute_dominance(input: &DominanceInput) -> PredictionOutcome {
    let segments = walk_segments(input.home.lord, input.away.lord, input.hora_lord);
    for s in &segments {
        debug!(
            index = s.index,
            ruler = s.ruler.name(),
            home = s.score.home,
            away = s.score.away,
            phase = s.phase.style_hint(),
            "flow segment"
        );
    }
    let events = segments.map(|s| narrate_segment(input, &s));

    let (home_ledger, away_ledger) = score_ledgers(input);
    let (home_score, away_score) = (home_ledger.total(), away_ledger.total());
    let home_probability = home_probability(home_score, away_score);
    let away_probability = 100 - home_probability;

    // A rounded 50/50 split is a draw even when the scores differ.
    let (verdict, winner) = if home_probability > away_probability {
        (Verdict::Home, input.home.name.clone())
    } else if away_probability > home_probability {
        (Verdict::Away, input.away.name.clone())
    } else {
        (Verdict::Draw, DRAW_LABEL.to_string())
    };

    debug!(
        home_score,
        away_score,
        home_probability,
        verdict = ?verdict,
        "dominance computed"
    );

    PredictionOutcome {
        home_probability,
        away_probability,
        home_score,
        away_score,
        verdict,
        winner,
        home_ledger,
        away_ledger,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dominance_types::Contender;
    use jamakkol_time::{ClockTime, NaiveDate};
    use jamakkol_vedic_base::{Rashi, rashi_lord};

    fn contender(name: &str, rashi: Rashi) -> Contender {
        Contender {
            name: name.to_string(),
            rashi,
            lord: rashi_lord(rashi),
        }
    }

    fn input(home: Rashi, away: Rashi, hora_lord: Graha) -> DominanceInput {
        DominanceInput {
            // Wednesday
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            kickoff: ClockTime::new(19, 45).unwrap(),
            home: contender("Lions", home),
            away: contender("Tigers", away),
            hora_lord,
        }
    }

    #[test]
    fn classification_cutoffs() {
        assert_eq!(classify_net(4), Phase::HomeGoalChance);
        assert_eq!(classify_net(3), Phase::HomeControl);
        assert_eq!(classify_net(2), Phase::HomeControl);
        assert_eq!(classify_net(1), Phase::Balanced);
        assert_eq!(classify_net(0), Phase::Balanced);
        assert_eq!(classify_net(-1), Phase::Balanced);
        assert_eq!(classify_net(-2), Phase::AwayControl);
        assert_eq!(classify_net(-3), Phase::AwayControl);
        assert_eq!(classify_net(-4), Phase::AwayGoalChance);
    }

    #[test]
    fn distance_nine_is_trine_bonus() {
        assert_eq!(house_distance(Rashi::Mesha, Rashi::Dhanu), 9);
        assert_eq!(house_distance(Rashi::Mithuna, Rashi::Kumbha), 9);
        assert_eq!(distance_points(9), (15, 0));
    }

    #[test]
    fn distance_eight_swings_fifteen() {
        assert_eq!(house_distance(Rashi::Mesha, Rashi::Vrischika), 8);
        assert_eq!(distance_points(8), (-15, 15));
    }

    #[test]
    fn distance_table() {
        for d in [2, 3, 7, 11] {
            assert_eq!(distance_points(d), (8, 0));
        }
        for d in [4, 10] {
            assert_eq!(distance_points(d), (0, 0));
        }
        for d in [1, 5] {
            assert_eq!(distance_points(d), (15, 0));
        }
        for d in [6, 12] {
            assert_eq!(distance_points(d), (-15, 15));
        }
    }

    #[test]
    fn same_hora_lord_is_eight_not_thirteen() {
        assert_eq!(hora_points(Graha::Surya, Graha::Surya), 8);
        // Sun regards Moon as friend, Saturn as enemy, Mercury as neutral
        assert_eq!(hora_points(Graha::Surya, Graha::Chandra), 5);
        assert_eq!(hora_points(Graha::Surya, Graha::Shani), -5);
        assert_eq!(hora_points(Graha::Surya, Graha::Buddh), 0);
    }

    #[test]
    fn segment_points_by_relation() {
        assert_eq!(segment_points(Graha::Guru, Graha::Guru), 5);
        assert_eq!(segment_points(Graha::Guru, Graha::Mangal), 2);
        assert_eq!(segment_points(Graha::Guru, Graha::Shukra), -2);
        assert_eq!(segment_points(Graha::Guru, Graha::Shani), 0);
    }

    #[test]
    fn rotation_starts_at_hora_lord() {
        assert_eq!(segment_ruler(Graha::Shani, 0), Graha::Shani);
        assert_eq!(segment_ruler(Graha::Shani, 1), Graha::Surya);
        assert_eq!(segment_ruler(Graha::Surya, 7), Graha::Surya);
        // shadow grahas start from the Sun
        assert_eq!(segment_ruler(Graha::Rahu, 0), Graha::Surya);
        assert_eq!(segment_ruler(Graha::Ketu, 2), Graha::Mangal);
    }

    #[test]
    fn segments_cover_ninety_eight_minutes() {
        let segs = walk_segments(Graha::Surya, Graha::Shani, Graha::Guru);
        assert_eq!(segs[0].start_min, 0.0);
        assert_eq!(segs[1].start_min, 12.25);
        assert_eq!(segs[7].end_min, 98.0);
    }

    #[test]
    fn aggregate_is_sum_of_segments() {
        let segs = walk_segments(Graha::Surya, Graha::Shani, Graha::Guru);
        let total = aggregate_flow(&segs);
        let home: i32 = segs.iter().map(|s| s.score.home).sum();
        let away: i32 = segs.iter().map(|s| s.score.away).sum();
        assert_eq!(total, SegmentScore { home, away });
    }

    #[test]
    fn probability_rounding_and_zero_total() {
        assert_eq!(home_probability(0, 0), 50);
        assert_eq!(home_probability(1, 2), 33);
        assert_eq!(home_probability(2, 1), 67);
        assert_eq!(home_probability(10, 0), 100);
    }

    #[test]
    fn same_lord_both_sides_is_draw() {
        // Mithuna and Kanya are both ruled by Mercury, four houses apart
        let out = compute_dominance(&input(Rashi::Mithuna, Rashi::Kanya, Graha::Guru));
        assert_eq!(out.verdict, Verdict::Draw);
        assert_eq!(out.winner, "Draw");
        assert_eq!((out.home_probability, out.away_probability), (50, 50));
        assert!(out.events.iter().all(|e| e.net == 0 && e.side.is_none()));
        assert!(out.events.iter().all(|e| e.team_name == "Neutral"));
    }

    #[test]
    fn near_tie_rounding_to_even_split_is_draw() {
        // Monday, Mercury against Jupiter in a Mars hora: 65 against 64
        let i = DominanceInput {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kickoff: ClockTime::new(11, 6).unwrap(),
            home: contender("Lions", Rashi::Mithuna),
            away: contender("Tigers", Rashi::Dhanu),
            hora_lord: Graha::Mangal,
        };
        let out = compute_dominance(&i);
        assert_eq!((out.home_score, out.away_score), (65, 64));
        assert_eq!((out.home_probability, out.away_probability), (50, 50));
        assert_eq!(out.verdict, Verdict::Draw);
        assert_eq!(out.winner, DRAW_LABEL);
    }

    #[test]
    fn event_windows_floor_segment_offsets() {
        let out = compute_dominance(&input(Rashi::Mesha, Rashi::Tula, Graha::Surya));
        let windows: Vec<_> = out.events.iter().map(|e| e.window.as_str()).collect();
        assert_eq!(
            windows,
            [
                "19:45 - 19:57",
                "19:57 - 20:09",
                "20:09 - 20:21",
                "20:21 - 20:34",
                "20:34 - 20:46",
                "20:46 - 20:58",
                "20:58 - 21:10",
                "21:10 - 21:23",
            ]
        );
        let minutes: Vec<_> = out.events.iter().map(|e| e.minute).collect();
        assert_eq!(minutes, [0, 12, 24, 36, 49, 61, 73, 85]);
    }
}
