//! Layered settings for the jamakkol tools.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/local.toml` (optional)
//! 4. An explicit file, when given (required)
//! 5. Environment variables prefixed `JAMAKKOL__`, e.g.
//!    `JAMAKKOL__LOGGING__LEVEL=debug` -> `logging.level`

pub mod error;

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use jamakkol_match::NarrativeFallbacks;
use jamakkol_time::{ClockTime, UtcOffset};
use jamakkol_vedic_base::{Language, Site, find_site};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

const ENV_PREFIX: &str = "JAMAKKOL";

/// Effective settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub location: LocationSettings,
    #[serde(rename = "match")]
    pub fixture: FixtureSettings,
    pub labels: LabelSettings,
    pub narrative: NarrativeFallbacks,
    pub logging: LoggingSettings,
}

/// Venue used when a command is not given one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// Catalogue site name. No site means sunrise 06:00 and a Sun hora.
    pub site: Option<String>,
    /// Local UTC offset in hours, e.g. 5.5.
    pub utc_offset_hours: f64,
}

/// Default fixture for `predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    pub home_team: String,
    pub away_team: String,
    /// Kick-off, `HH:MM`.
    pub kickoff: String,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            home_team: "Chennaiyin FC".into(),
            away_team: "Kerala Blasters".into(),
            kickoff: "16:30".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub language: Language,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `jamakkol_match=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load from the standard files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load, adding `path` (which must exist) after the standard files.
    pub fn load_with(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder.add_source(environment()).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load from a TOML string only.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn language(&self) -> Language {
        self.labels.language
    }

    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        UtcOffset::from_hours(self.location.utc_offset_hours).map_err(|e| ConfigError::Invalid {
            key: "location.utc_offset_hours",
            message: e.to_string(),
        })
    }

    /// The configured catalogue site, if any.
    pub fn site(&self) -> Result<Option<&'static Site>, ConfigError> {
        self.location
            .site
            .as_deref()
            .map(|name| {
                find_site(name).map_err(|e| ConfigError::Invalid {
                    key: "location.site",
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    pub fn kickoff(&self) -> Result<ClockTime, ConfigError> {
        ClockTime::parse(&self.fixture.kickoff).map_err(|e| ConfigError::Invalid {
            key: "match.kickoff",
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_gives_defaults() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.logging.level, "warn");
        assert_eq!(s.logging.format, LogFormat::Pretty);
        assert_eq!(s.language(), Language::English);
        assert_eq!(s.fixture.home_team, "Chennaiyin FC");
        assert_eq!(s.site().unwrap(), None);
        assert_eq!(
            s.narrative.failed_lucky_time,
            NarrativeFallbacks::default().failed_lucky_time
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let s = Settings::from_toml_str(
            r#"
            [location]
            site = "Madrid"
            utc_offset_hours = 2.0

            [labels]
            language = "tamil"

            [narrative]
            failed_lucky_time = "Extra time"
            "#,
        )
        .unwrap();
        assert_eq!(s.site().unwrap().map(|site| site.country), Some("Spain"));
        assert_eq!(s.utc_offset().unwrap().hours(), 2.0);
        assert_eq!(s.language(), Language::Tamil);
        assert_eq!(s.narrative.failed_lucky_time, "Extra time");
        assert_eq!(s.narrative.missing_lucky_time, "2nd Half");
        assert_eq!(s.logging, LoggingSettings::default());
    }

    #[test]
    fn invalid_values_are_reported_by_key() {
        let s = Settings::from_toml_str(
            r#"
            [location]
            site = "Atlantis"
            utc_offset_hours = 20.0
            [match]
            kickoff = "25:00"
            "#,
        )
        .unwrap();
        assert!(matches!(
            s.site(),
            Err(ConfigError::Invalid { key: "location.site", .. })
        ));
        assert!(matches!(
            s.utc_offset(),
            Err(ConfigError::Invalid { key: "location.utc_offset_hours", .. })
        ));
        assert!(matches!(
            s.kickoff(),
            Err(ConfigError::Invalid { key: "match.kickoff", .. })
        ));
    }

    #[test]
    fn unknown_format_fails_to_load() {
        let r = Settings::from_toml_str("[logging]\nformat = \"xml\"\n");
        assert!(matches!(r, Err(ConfigError::Load(_))));
    }

    #[test]
    fn toml_rendering_reloads_to_same_settings() {
        let mut s = Settings::default();
        s.location.site = Some("Paris".into());
        s.logging.format = LogFormat::Json;
        let text = s.to_toml().unwrap();
        assert!(text.contains("[logging]"));
        assert_eq!(Settings::from_toml_str(&text).unwrap(), s);
    }
}
