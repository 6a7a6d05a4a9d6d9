//! Configuration management for the Tourism AI application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TourismAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Tourism AI application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourismAiConfig {
    /// Geocoding (Nominatim) settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Weather (Open-Meteo) settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Points-of-interest (Overpass) settings
    #[serde(default)]
    pub places: PlacesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
}

/// Geocoding API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_seconds: u32,
    /// Nominatim rejects requests without an identifying agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Points-of-interest API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_places_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of attractions in a reply
    #[serde(default = "default_attraction_limit")]
    pub attraction_limit: usize,
    /// Radius of the tourism/leisure search in meters
    #[serde(default = "default_primary_radius")]
    pub primary_radius_m: u32,
    /// Radius of the broadened named-tourism search in meters
    #[serde(default = "default_fallback_radius")]
    pub fallback_radius_m: u32,
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

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of past exchanges kept for display
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    "Tourism-AI-Agent/1.0".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_places_base_url() -> String {
    "https://overpass-api.de/api".to_string()
}

fn default_places_timeout() -> u32 {
    30
}

fn default_attraction_limit() -> usize {
    5
}

fn default_primary_radius() -> u32 {
    10_000
}

fn default_fallback_radius() -> u32 {
    20_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_history_size() -> usize {
    5
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_geocoding_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_places_base_url(),
            timeout_seconds: default_places_timeout(),
            attraction_limit: default_attraction_limit(),
            primary_radius_m: default_primary_radius(),
            fallback_radius_m: default_fallback_radius(),
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

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            history_size: default_history_size(),
        }
    }
}

impl TourismAiConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TOURISM_AI_PLACES__ATTRACTION_LIMIT=8 -> places.attraction_limit
        builder = builder.add_source(
            Environment::with_prefix("TOURISM_AI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TourismAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourism-ai").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_geocoding_timeout();
        }
        if self.geocoding.user_agent.is_empty() {
            self.geocoding.user_agent = default_user_agent();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.places.base_url.is_empty() {
            self.places.base_url = default_places_base_url();
        }
        if self.places.timeout_seconds == 0 {
            self.places.timeout_seconds = default_places_timeout();
        }
        if self.places.attraction_limit == 0 {
            self.places.attraction_limit = default_attraction_limit();
        }
        if self.places.primary_radius_m == 0 {
            self.places.primary_radius_m = default_primary_radius();
        }
        if self.places.fallback_radius_m == 0 {
            self.places.fallback_radius_m = default_fallback_radius();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.web.history_size == 0 {
            self.web.history_size = default_history_size();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        let timeouts = [
            ("Geocoding", self.geocoding.timeout_seconds),
            ("Weather", self.weather.timeout_seconds),
            ("Places", self.places.timeout_seconds),
        ];
        for (name, timeout) in timeouts {
            if timeout == 0 || timeout > 300 {
                return Err(TourismAiError::config(format!(
                    "{name} API timeout must be between 1 and 300 seconds"
                ))
                .into());
            }
        }

        if !(1..=50).contains(&self.places.attraction_limit) {
            return Err(
                TourismAiError::config("Attraction limit must be between 1 and 50").into(),
            );
        }

        if self.places.fallback_radius_m > 100_000 || self.places.primary_radius_m > 100_000 {
            return Err(TourismAiError::config("Search radius cannot exceed 100 km").into());
        }

        if self.places.fallback_radius_m < self.places.primary_radius_m {
            return Err(TourismAiError::config(
                "Fallback search radius cannot be smaller than the primary radius",
            )
            .into());
        }

        if self.web.history_size == 0 || self.web.history_size > 100 {
            return Err(
                TourismAiError::config("History size must be between 1 and 100").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourismAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourismAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("Geocoding", &self.geocoding.base_url),
            ("Weather", &self.weather.base_url),
            ("Places", &self.places.base_url),
        ];
        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TourismAiError::config(format!(
                    "{name} API base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TourismAiConfig::default();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.geocoding.timeout_seconds, 10);
        assert_eq!(config.places.attraction_limit, 5);
        assert_eq!(config.places.primary_radius_m, 10_000);
        assert_eq!(config.places.fallback_radius_m, 20_000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.web.history_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TourismAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = TourismAiConfig::default();
        config.places.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Places API timeout"));
    }

    #[test]
    fn test_config_validation_radius_order() {
        let mut config = TourismAiConfig::default();
        config.places.primary_radius_m = 30_000;
        config.places.fallback_radius_m = 20_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = TourismAiConfig::default();
        config.geocoding.base_url = "nominatim.local".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Geocoding API base URL"));
    }

    #[test]
    fn test_apply_defaults_refills_zeroes() {
        let mut config = TourismAiConfig::default();
        config.places.attraction_limit = 0;
        config.weather.base_url.clear();
        config.apply_defaults();
        assert_eq!(config.places.attraction_limit, 5);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!("tourism-ai-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[places]\nattraction_limit = 8\n\n[logging]\nformat = \"json\"").unwrap();

        let config = TourismAiConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.places.attraction_limit, 8);
        assert_eq!(config.places.primary_radius_m, 10_000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.weather.timeout_seconds, 10);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TourismAiConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("tourism-ai"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
