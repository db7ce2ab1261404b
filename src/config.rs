//! Configuration management for the budget estimator
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::BudgetError;
use crate::currency::DEFAULT_EXCHANGE_RATE;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Live exchange rate source
    #[serde(default)]
    pub exchange_rate: ExchangeRateConfig,
    /// Weather forecast source
    #[serde(default)]
    pub weather: WeatherConfig,
    /// OpenStreetMap attraction source
    #[serde(default)]
    pub attractions: AttractionsConfig,
    /// Pricing table source
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum accepted request body in KB
    #[serde(default = "default_body_limit")]
    pub body_limit_kb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateConfig {
    /// Endpoint returning SGD-based rates
    #[serde(default = "default_exchange_api_url")]
    pub api_url: String,
    #[serde(default = "default_exchange_cache_ttl")]
    pub cache_ttl_minutes: u64,
    #[serde(default = "default_exchange_timeout")]
    pub timeout_seconds: u64,
    /// SGD per JPY used when the live source fails
    #[serde(default = "default_exchange_rate")]
    pub default_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_weather_cache_ttl")]
    pub cache_ttl_minutes: u64,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttractionsConfig {
    /// Overpass interpreter endpoint
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,
    #[serde(default = "default_attractions_cache_ttl")]
    pub cache_ttl_hours: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// JSON pricing table replacing the built-in one
    #[serde(default)]
    pub table_path: Option<PathBuf>,
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

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_body_limit() -> usize {
    64
}

fn default_exchange_api_url() -> String {
    "https://api.exchangerate-api.com/v4/latest/SGD".to_string()
}

fn default_exchange_cache_ttl() -> u64 {
    60
}

fn default_exchange_timeout() -> u64 {
    10
}

fn default_exchange_rate() -> f64 {
    DEFAULT_EXCHANGE_RATE
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_cache_ttl() -> u64 {
    15
}

fn default_forecast_days() -> u32 {
    14
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_attractions_cache_ttl() -> u64 {
    24
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_kb: default_body_limit(),
        }
    }
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        Self {
            api_url: default_exchange_api_url(),
            cache_ttl_minutes: default_exchange_cache_ttl(),
            timeout_seconds: default_exchange_timeout(),
            default_rate: default_exchange_rate(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            cache_ttl_minutes: default_weather_cache_ttl(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for AttractionsConfig {
    fn default() -> Self {
        Self {
            overpass_url: default_overpass_url(),
            cache_ttl_hours: default_attractions_cache_ttl(),
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

impl ServerConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl ExchangeRateConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes * 60)
    }
}

impl WeatherConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes * 60)
    }
}

impl AttractionsConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 3600)
    }
}

impl BudgetConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // JAPAN_BUDGET__SERVER__PORT=8080 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("JAPAN_BUDGET")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: BudgetConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("japan-budget").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_kb == 0 {
            self.server.body_limit_kb = default_body_limit();
        }
        if self.exchange_rate.api_url.is_empty() {
            self.exchange_rate.api_url = default_exchange_api_url();
        }
        if self.exchange_rate.timeout_seconds == 0 {
            self.exchange_rate.timeout_seconds = default_exchange_timeout();
        }
        if self.exchange_rate.default_rate <= 0.0 {
            self.exchange_rate.default_rate = default_exchange_rate();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.attractions.overpass_url.is_empty() {
            self.attractions.overpass_url = default_overpass_url();
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

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.request_timeout_seconds > 300 {
            return Err(BudgetError::config("Request timeout cannot exceed 300 seconds").into());
        }

        if self.exchange_rate.timeout_seconds > 60 {
            return Err(
                BudgetError::config("Exchange rate timeout cannot exceed 60 seconds").into(),
            );
        }

        if self.exchange_rate.cache_ttl_minutes > 1440 {
            return Err(BudgetError::config(
                "Exchange rate cache TTL cannot exceed 1440 minutes (1 day)",
            )
            .into());
        }

        if !(self.exchange_rate.default_rate > 0.0 && self.exchange_rate.default_rate < 1.0) {
            return Err(BudgetError::config(
                "Default exchange rate must be SGD per JPY, between 0 and 1",
            )
            .into());
        }

        if self.weather.forecast_days > 16 {
            return Err(BudgetError::config("Forecast days cannot exceed 16").into());
        }

        if self.attractions.cache_ttl_hours > 168 {
            return Err(BudgetError::config(
                "Attractions cache TTL cannot exceed 168 hours (1 week)",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BudgetError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(BudgetError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Exchange rate API URL", &self.exchange_rate.api_url),
            ("Weather API base URL", &self.weather.base_url),
            ("Overpass URL", &self.attractions.overpass_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(
                    BudgetError::config(format!("{name} must be a valid HTTP or HTTPS URL")).into(),
                );
            }
        }

        Ok(())
    }
}
