//! End-to-end pipeline tests.

use jamakkol_match::{
    ExplanationSource, MatchDetails, NarrativeFallbacks, OfflineNarrator, ScriptedNarrator,
    predict,
};
use jamakkol_time::UtcOffset;
use jamakkol_vedic_base::{PRESET_SITES, find_site};

#[test]
fn every_site_produces_a_complete_prediction() {
    for site in &PRESET_SITES {
        let details = MatchDetails::parse("Home", "Away", "2025-08-16", "20:00")
            .unwrap()
            .at_site(site);
        let p = predict(&details, &OfflineNarrator, &NarrativeFallbacks::default());
        assert_ne!(p.signs.udaya, p.signs.arudha, "{}", site.name);
        assert_eq!(
            p.outcome.home_probability as u32 + p.outcome.away_probability as u32,
            100
        );
        assert_eq!(p.outcome.events.len(), 8);
        assert_eq!(p.explanation.source, ExplanationSource::Fallback);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let details = MatchDetails::parse("Real", "Atletico", "2025-04-12", "21:00")
        .unwrap()
        .at_site(find_site("Madrid").unwrap())
        .with_offset(UtcOffset::from_hours(2.0).unwrap());
    let narrator = ScriptedNarrator::new(r#"{"reasoning":"Venus smiles.","luckyTime":"15-30 mins"}"#);
    let a = predict(&details, &narrator, &NarrativeFallbacks::default());
    let b = predict(&details, &narrator, &NarrativeFallbacks::default());
    assert_eq!(a, b);
    assert_eq!(a.explanation.lucky_time, "15-30 mins");
}

#[test]
fn prediction_serializes_to_json() {
    let details = MatchDetails::parse("Home", "Away", "2024-03-20", "12:00")
        .unwrap()
        .at_site(find_site("London").unwrap());
    let p = predict(&details, &OfflineNarrator, &NarrativeFallbacks::default());
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["details"]["date"], "2024-03-20");
    assert_eq!(json["outcome"]["events"].as_array().unwrap().len(), 8);
    assert!(json["signs"]["udaya"].is_u64());
    assert_eq!(json["explanation"]["lucky_time"], "Mid-Game");
}
