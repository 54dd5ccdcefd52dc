//! Match prediction on top of the jamakkol Vedic tables.
//!
//! This crate provides:
//! - The dominance engine: fixed bonuses, the 8-segment flow walk, the
//!   probability split and the narrated timeline
//! - The narrative-generator seam with fallback text
//! - The end-to-end `predict` pipeline

pub mod dominance;
pub mod dominance_types;
pub mod error;
pub mod narrative;
pub mod prediction;

pub use dominance::{
    DRAW_LABEL, NEUTRAL_LABEL, aggregate_flow, classify_net, compute_dominance, day_lord_points,
    distance_points, home_probability, hora_points, score_ledgers, score_segment, segment_points,
    segment_ruler, walk_segments,
};
pub use dominance_types::{
    BASE_SCORE, Contender, DominanceEvent, DominanceInput, FLOW_SEGMENTS, FlowSegment,
    MATCH_MINUTES, Phase, PredictionOutcome, ScoreLedger, SegmentScore, Side, Verdict,
};
pub use error::{MatchError, NarrativeError};
pub use narrative::{
    Explanation, ExplanationSource, NarrativeFallbacks, NarrativeRequest, Narrator,
    OfflineNarrator, SYSTEM_INSTRUCTION, ScriptedNarrator, explain,
};
pub use prediction::{
    MatchDetails, Prediction, dominance_input, narrative_request, predict,
};
