//! Configuration management for `weathercast`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::WeathercastError;
use crate::models::TimeOfDay;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeathercastConfig {
    /// Default prediction request
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Request limits
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Input parsing settings
    #[serde(default)]
    pub input: InputConfig,
    /// Progress animation settings
    #[serde(default)]
    pub presentation: PresentationConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Random source settings
    #[serde(default)]
    pub random: RandomConfig,
}

/// Default prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of steps to predict
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Time of day to predict for
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted horizon
    #[serde(default = "default_max_horizon")]
    pub max_horizon: usize,
}

/// Input parsing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Reject temperature readings that are not whole numbers
    #[serde(default)]
    pub integer_temperatures: bool,
}

/// Progress animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Play the progress animation at all
    #[serde(default = "default_animate")]
    pub animate: bool,
    /// Pause after each status message
    #[serde(default = "default_stage_delay")]
    pub stage_delay_ms: u64,
    /// Pause after the "ready" message
    #[serde(default = "default_ready_delay")]
    pub ready_delay_ms: u64,
    /// Pause after each charted step
    #[serde(default = "default_step_delay")]
    pub step_delay_ms: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Random source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Seed for reproducible weather-type draws
    pub seed: Option<u64>,
}

// Default value functions
fn default_horizon() -> usize {
    3
}

fn default_time_of_day() -> String {
    "morning".to_string()
}

fn default_max_horizon() -> usize {
    10
}

fn default_animate() -> bool {
    true
}

fn default_stage_delay() -> u64 {
    1000
}

fn default_ready_delay() -> u64 {
    500
}

fn default_step_delay() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

const MAX_DELAY_MS: u64 = 10_000;
const HORIZON_CEILING: usize = 100;

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            time_of_day: default_time_of_day(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_horizon: default_max_horizon(),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            animate: default_animate(),
            stage_delay_ms: default_stage_delay(),
            ready_delay_ms: default_ready_delay(),
            step_delay_ms: default_step_delay(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl WeathercastConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let required = config_path.is_some();
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if required || config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(required)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WEATHERCAST_LIMITS__MAX_HORIZON=5
        builder = builder.add_source(
            Environment::with_prefix("WEATHERCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().with_context(|| {
            format!(
                "Failed to build configuration from {}",
                config_file.display()
            )
        })?;

        let mut config: WeathercastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weathercast").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    ///
    /// Zero horizons are left for [`Self::validate`] to reject.
    pub fn apply_defaults(&mut self) {
        if self.defaults.time_of_day.is_empty() {
            self.defaults.time_of_day = default_time_of_day();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// The configured default time of day
    pub fn time_of_day(&self) -> Result<TimeOfDay> {
        self.defaults
            .time_of_day
            .trim()
            .to_lowercase()
            .parse::<TimeOfDay>()
            .map_err(|_| {
                WeathercastError::config(format!(
                    "Invalid default time of day '{}'. Must be one of: morning, afternoon, evening, night",
                    self.defaults.time_of_day
                ))
            })
            .map_err(Into::into)
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=HORIZON_CEILING).contains(&self.limits.max_horizon) {
            return Err(WeathercastError::config(format!(
                "Maximum horizon must be between 1 and {HORIZON_CEILING}"
            ))
            .into());
        }

        if self.defaults.horizon == 0 {
            return Err(WeathercastError::config("Default horizon must be at least 1").into());
        }

        if self.defaults.horizon > self.limits.max_horizon {
            return Err(WeathercastError::config(format!(
                "Default horizon {} exceeds the maximum horizon {}",
                self.defaults.horizon, self.limits.max_horizon
            ))
            .into());
        }

        let presentation = &self.presentation;
        let delays = [
            presentation.stage_delay_ms,
            presentation.ready_delay_ms,
            presentation.step_delay_ms,
        ];
        if delays.iter().any(|&d| d > MAX_DELAY_MS) {
            return Err(WeathercastError::config(format!(
                "Presentation delays cannot exceed {MAX_DELAY_MS} ms"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeathercastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeathercastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        self.time_of_day()?;

        Ok(())
    }
}
