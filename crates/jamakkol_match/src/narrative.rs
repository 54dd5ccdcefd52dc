//! Seam to the external narrative generator.
//!
//! The generator only decorates a prediction with a short reasoning and
//! a "lucky time" label. The winner and probabilities are fixed before it
//! is consulted, and any failure is replaced by fallback text.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::NarrativeError;

/// Role instruction sent along with every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "Act as an expert Jamakkol Prasanam astrologer and football analyst.";

/// What the generator is told about a computed prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeRequest {
    pub home_team: String,
    pub away_team: String,
    pub home_rashi: &'static str,
    pub home_lord: &'static str,
    pub away_rashi: &'static str,
    pub away_lord: &'static str,
    pub winner: String,
    pub home_probability: u8,
    pub away_probability: u8,
}

impl NarrativeRequest {
    /// Prompt text asking for a JSON object with `reasoning` and `luckyTime`.
    pub fn prompt(&self) -> String {
        format!(
            "Match: {home} vs {away}\n\
             \n\
             Computed positions:\n\
             - Udhayam (home): {home_rashi} (lord {home_lord})\n\
             - Aarudam (away): {away_rashi} (lord {away_lord})\n\
             - Calculated winner: {winner}\n\
             - Probabilities: {home} ({hp}%) vs {away} ({ap}%)\n\
             \n\
             Give a short astrological reasoning (at most 40 words) for why {winner} \
             prevails, based on {home_lord} versus {away_lord}. Also suggest a lucky \
             time window such as \"30-45 mins\". Reply with a JSON object holding the \
             string fields \"reasoning\" and \"luckyTime\".",
            home = self.home_team,
            away = self.away_team,
            home_rashi = self.home_rashi,
            home_lord = self.home_lord,
            away_rashi = self.away_rashi,
            away_lord = self.away_lord,
            winner = self.winner,
            hp = self.home_probability,
            ap = self.away_probability,
        )
    }
}

/// External text generator.
///
/// Receives the role instruction and the prompt text, and returns the raw
/// response body, expected to be a JSON object.
pub trait Narrator {
    fn narrate(&self, system: &str, prompt: &str) -> Result<String, NarrativeError>;
}

/// Narrator for environments without a generator; always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrator;

impl Narrator for OfflineNarrator {
    fn narrate(&self, _system: &str, _prompt: &str) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("no narrative generator configured".into()))
    }
}

/// Narrator that answers every request with a fixed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedNarrator {
    body: String,
}

impl ScriptedNarrator {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Narrator for ScriptedNarrator {
    fn narrate(&self, _system: &str, _prompt: &str) -> Result<String, NarrativeError> {
        Ok(self.body.clone())
    }
}

/// Expected response shape.
#[derive(Debug, Default, Deserialize)]
struct NarrativeReply {
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default, rename = "luckyTime", alias = "lucky_time")]
    lucky_time: Option<String>,
}

/// Text substituted when the generator's answer is incomplete or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeFallbacks {
    /// Reasoning used when a successful reply lacks one.
    pub missing_reasoning: String,
    /// Lucky time used when a successful reply lacks one.
    pub missing_lucky_time: String,
    /// Reasoning used when the call failed.
    pub failed_reasoning: String,
    /// Lucky time used when the call failed.
    pub failed_lucky_time: String,
}

impl Default for NarrativeFallbacks {
    fn default() -> Self {
        Self {
            missing_reasoning: "Planetary alignments favor the stronger lord.".into(),
            missing_lucky_time: "2nd Half".into(),
            failed_reasoning: "The stars align with the mathematical probability.".into(),
            failed_lucky_time: "Mid-Game".into(),
        }
    }
}

/// Where an explanation's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationSource {
    /// Both fields came from the generator.
    Generated,
    /// The generator answered but at least one field was filled from fallbacks.
    Partial,
    /// The generator failed; both fields are fallbacks.
    Fallback,
}

/// Decorative text attached to a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub winner: String,
    pub reasoning: String,
    pub lucky_time: String,
    pub home_strength: u8,
    pub away_strength: u8,
    pub source: ExplanationSource,
}

fn parse_reply(body: &str) -> Result<NarrativeReply, NarrativeError> {
    if body.trim().is_empty() {
        return Ok(NarrativeReply::default());
    }
    serde_json::from_str(body).map_err(|e| NarrativeError::Malformed(e.to_string()))
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Ask `narrator` for text, filling gaps from `fallbacks`. Never fails.
pub fn explain(
    narrator: &dyn Narrator,
    request: &NarrativeRequest,
    fallbacks: &NarrativeFallbacks,
) -> Explanation {
    let reply = narrator
        .narrate(SYSTEM_INSTRUCTION, &request.prompt())
        .and_then(|body| parse_reply(&body));
    let (reasoning, lucky_time, source) = match reply {
        Ok(reply) => {
            let reasoning = non_empty(reply.reasoning);
            let lucky_time = non_empty(reply.lucky_time);
            let source = if reasoning.is_some() && lucky_time.is_some() {
                ExplanationSource::Generated
            } else {
                ExplanationSource::Partial
            };
            debug!(?source, "narrative received");
            (
                reasoning.unwrap_or_else(|| fallbacks.missing_reasoning.clone()),
                lucky_time.unwrap_or_else(|| fallbacks.missing_lucky_time.clone()),
                source,
            )
        }
        Err(e) => {
            match &e {
                NarrativeError::Unavailable(_) => info!(error = %e, "using fallback text"),
                NarrativeError::Malformed(_) => {
                    warn!(error = %e, "narrative generator failed, using fallback text")
                }
            }
            (
                fallbacks.failed_reasoning.clone(),
                fallbacks.failed_lucky_time.clone(),
                ExplanationSource::Fallback,
            )
        }
    };
    Explanation {
        winner: request.winner.clone(),
        reasoning,
        lucky_time,
        home_strength: request.home_probability,
        away_strength: request.away_probability,
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records what it was asked and answers with a fixed body.
    #[derive(Default)]
    struct RecordingNarrator {
        seen: RefCell<Vec<(String, String)>>,
    }

    impl Narrator for RecordingNarrator {
        fn narrate(&self, system: &str, prompt: &str) -> Result<String, NarrativeError> {
            self.seen.borrow_mut().push((system.to_string(), prompt.to_string()));
            Ok(r#"{"reasoning":"ok","luckyTime":"1st Half"}"#.to_string())
        }
    }

    fn request() -> NarrativeRequest {
        NarrativeRequest {
            home_team: "Lions".into(),
            away_team: "Tigers".into(),
            home_rashi: "Gemini",
            home_lord: "Mercury",
            away_rashi: "Sagittarius",
            away_lord: "Jupiter",
            winner: "Lions".into(),
            home_probability: 61,
            away_probability: 39,
        }
    }

    #[test]
    fn prompt_mentions_both_lords_and_probabilities() {
        let p = request().prompt();
        assert!(p.contains("Lions vs Tigers"));
        assert!(p.contains("Gemini (lord Mercury)"));
        assert!(p.contains("Lions (61%) vs Tigers (39%)"));
        assert!(p.contains("luckyTime"));
    }

    #[test]
    fn narrator_receives_instruction_and_prompt() {
        let n = RecordingNarrator::default();
        let e = explain(&n, &request(), &NarrativeFallbacks::default());
        assert_eq!(e.source, ExplanationSource::Generated);
        let seen = n.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, SYSTEM_INSTRUCTION);
        assert_eq!(seen[0].1, request().prompt());
    }

    #[test]
    fn full_reply_is_used() {
        let n = ScriptedNarrator::new(r#"{"reasoning":"Mercury is quick.","luckyTime":"60-75 mins"}"#);
        let e = explain(&n, &request(), &NarrativeFallbacks::default());
        assert_eq!(e.reasoning, "Mercury is quick.");
        assert_eq!(e.lucky_time, "60-75 mins");
        assert_eq!(e.source, ExplanationSource::Generated);
        assert_eq!(e.winner, "Lions");
        assert_eq!((e.home_strength, e.away_strength), (61, 39));
    }

    #[test]
    fn missing_fields_use_success_fallbacks() {
        let n = ScriptedNarrator::new(r#"{"reasoning":""}"#);
        let e = explain(&n, &request(), &NarrativeFallbacks::default());
        assert_eq!(e.reasoning, "Planetary alignments favor the stronger lord.");
        assert_eq!(e.lucky_time, "2nd Half");
        assert_eq!(e.source, ExplanationSource::Partial);
    }

    #[test]
    fn empty_body_counts_as_empty_object() {
        let e = explain(
            &ScriptedNarrator::new(""),
            &request(),
            &NarrativeFallbacks::default(),
        );
        assert_eq!(e.lucky_time, "2nd Half");
        assert_eq!(e.source, ExplanationSource::Partial);
    }

    #[test]
    fn malformed_body_uses_failure_fallbacks() {
        let e = explain(
            &ScriptedNarrator::new("not json"),
            &request(),
            &NarrativeFallbacks::default(),
        );
        assert_eq!(e.reasoning, "The stars align with the mathematical probability.");
        assert_eq!(e.lucky_time, "Mid-Game");
        assert_eq!(e.source, ExplanationSource::Fallback);
    }

    #[test]
    fn offline_uses_failure_fallbacks() {
        let e = explain(&OfflineNarrator, &request(), &NarrativeFallbacks::default());
        assert_eq!(e.lucky_time, "Mid-Game");
        assert_eq!(e.winner, "Lions");
    }

    #[test]
    fn custom_fallbacks() {
        let fallbacks = NarrativeFallbacks {
            failed_lucky_time: "Stoppage time".into(),
            ..NarrativeFallbacks::default()
        };
        let e = explain(&OfflineNarrator, &request(), &fallbacks);
        assert_eq!(e.lucky_time, "Stoppage time");
    }
}
