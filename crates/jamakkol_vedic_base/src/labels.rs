//! The two fixed label sets (English and Tamil).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Display language for domain labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    /// Pick between an English and a Tamil label.
    pub const fn pick(self, english: &'static str, tamil: &'static str) -> &'static str {
        match self {
            Self::English => english,
            Self::Tamil => tamil,
        }
    }
}

impl FromStr for Language {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "tamil" | "ta" => Ok(Self::Tamil),
            _ => Err(VedicError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert!("french".parse::<Language>().is_err());
    }

    #[test]
    fn pick_selects_set() {
        assert_eq!(Language::English.pick("Neutral", "சமம்"), "Neutral");
        assert_eq!(Language::Tamil.pick("Neutral", "சமம்"), "சமம்");
    }
}
