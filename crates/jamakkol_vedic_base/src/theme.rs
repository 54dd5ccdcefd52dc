//! Deterministic colour theme for a match moment.
//!
//! Purely cosmetic. The date and time strings are hashed with a
//! 32-bit shift-and-subtract string hash and the hash picks two hues.

use serde::Serialize;

/// Home/away colours and gradients as CSS `hsl()` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTheme {
    pub home_hue: u16,
    pub away_hue: u16,
    pub home_color: String,
    pub away_color: String,
    pub home_gradient: String,
    pub away_gradient: String,
    pub accent_color: String,
}

/// `hash = c + (hash << 5) - hash` over UTF-16 code units.
///
/// The shift operates on the low 32 bits as a signed integer while the
/// running value itself is kept wide, so it may leave the i32 range.
fn theme_hash(input: &str) -> i64 {
    input.encode_utf16().fold(0_i64, |hash, unit| {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        unit as i64 + shifted - hash
    })
}

fn gradient(hue: u16) -> String {
    format!("linear-gradient(135deg, hsl({hue}, 80%, 60%), hsl({hue}, 70%, 40%))")
}

/// Theme for a match on `date` at `time` (raw input strings).
pub fn generate_match_theme(date: &str, time: &str) -> MatchTheme {
    let hash = theme_hash(&format!("{date}{time}"));
    let home_hue = (hash % 360).unsigned_abs() as u16;
    let away_hue = ((hash * 7) % 360).unsigned_abs() as u16;
    let accent_hue = (home_hue + 180) % 360;
    MatchTheme {
        home_hue,
        away_hue,
        home_color: format!("hsl({home_hue}, 70%, 50%)"),
        away_color: format!("hsl({away_hue}, 70%, 50%)"),
        home_gradient: gradient(home_hue),
        away_gradient: gradient(away_hue),
        accent_color: format!("hsl({accent_hue}, 80%, 60%)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_leaves_i32_range() {
        assert_eq!(theme_hash("2024-03-2012:00"), -2_215_159_906);
        assert_eq!(theme_hash("2025-08-1619:45"), -7_543_902_315);
        assert_eq!(theme_hash(""), 0);
    }

    #[test]
    fn known_theme() {
        let t = generate_match_theme("2024-03-20", "12:00");
        assert_eq!(t.home_hue, 346);
        assert_eq!(t.away_hue, 262);
        assert_eq!(t.home_color, "hsl(346, 70%, 50%)");
        assert_eq!(t.accent_color, "hsl(166, 80%, 60%)");
        assert_eq!(
            t.away_gradient,
            "linear-gradient(135deg, hsl(262, 80%, 60%), hsl(262, 70%, 40%))"
        );
    }

    #[test]
    fn empty_input_is_red_with_cyan_accent() {
        let t = generate_match_theme("", "");
        assert_eq!(t.home_hue, 0);
        assert_eq!(t.accent_color, "hsl(180, 80%, 60%)");
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            generate_match_theme("2025-08-16", "19:45"),
            generate_match_theme("2025-08-16", "19:45")
        );
        assert_eq!(generate_match_theme("2025-08-16", "19:45").home_hue, 75);
    }
}
