use crate::core::SlotError;
use crate::models::{BusinessHours, EngineParams};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_borderline_buffer")]
    pub borderline_buffer: f64,
    #[serde(default = "default_hour_start")]
    pub hour_start: u32,
    #[serde(default = "default_hour_end")]
    pub hour_end: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            borderline_buffer: default_borderline_buffer(),
            hour_start: default_hour_start(),
            hour_end: default_hour_end(),
        }
    }
}

impl EngineSettings {
    /// Validate and convert into the parameters the engine runs with
    pub fn params(&self) -> Result<EngineParams, SlotError> {
        Ok(EngineParams {
            borderline_buffer: self.borderline_buffer,
            hours: BusinessHours::new(self.hour_start, self.hour_end)?,
        })
    }
}

fn default_borderline_buffer() -> f64 { EngineParams::DEFAULT_BUFFER }
fn default_hour_start() -> u32 { BusinessHours::DEFAULT_START }
fn default_hour_end() -> u32 { BusinessHours::DEFAULT_END }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_rating_capacity")]
    pub rating_capacity: u64,
    #[serde(default = "default_rating_ttl")]
    pub rating_ttl_secs: u64,
    #[serde(default = "default_onboarding_capacity")]
    pub onboarding_capacity: u64,
    #[serde(default = "default_onboarding_ttl")]
    pub onboarding_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            rating_capacity: default_rating_capacity(),
            rating_ttl_secs: default_rating_ttl(),
            onboarding_capacity: default_onboarding_capacity(),
            onboarding_ttl_secs: default_onboarding_ttl(),
        }
    }
}

fn default_rating_capacity() -> u64 { 10_000 }
fn default_rating_ttl() -> u64 { 3600 }
fn default_onboarding_capacity() -> u64 { 10_000 }
fn default_onboarding_ttl() -> u64 { 24 * 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PADEL_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PADEL__ENGINE__HOUR_END -> engine.hour_end
            .add_source(
                Environment::with_prefix("PADEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PADEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
