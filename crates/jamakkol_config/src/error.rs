use thiserror::Error;

/// Errors from loading or interpreting settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A source could not be read or did not deserialize.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    /// Settings could not be rendered back to TOML.
    #[error("failed to render settings: {0}")]
    Render(#[from] toml::ser::Error),
    /// A value was read but is not usable.
    #[error("invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
