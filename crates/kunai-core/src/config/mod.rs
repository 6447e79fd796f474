use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, FileFormat};
use serde::Deserialize;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// ## Summary
/// Controls how the validation engine interprets rules that the calendaring
/// RFCs mark as required but that common producers omit.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ValidationConfig {
    /// Waive strict-only requirements (e.g. `ORGANIZER` on a published to-do).
    pub relaxed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match `Settings`.
    pub fn from_toml(document: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("validation.relaxed", false)?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(relaxed = settings.validation.relaxed, "Validation settings loaded");
    Ok(settings)
}
