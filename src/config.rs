//! Configuration management for the Yuletide planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::YuletideError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Languages the planner can answer in
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "de", "fr"];

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Root configuration structure for the Yuletide planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YuletideConfig {
    /// Text generation backend configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Web API server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Destination catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Default planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Text generation backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Disable to always use curated content
    #[serde(default = "default_generator_enabled")]
    pub enabled: bool,
    /// Gemini API key; falls back to `GEMINI_API_KEY`
    pub api_key: Option<String>,
    #[serde(default = "default_generator_model")]
    pub model: String,
    #[serde(default = "default_generator_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_generator_timeout")]
    pub timeout_seconds: u32,
}

/// Web API server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
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

/// Where destination profiles come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Default planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_departure_city")]
    pub departure_city: String,
    #[serde(default = "default_language")]
    pub language: String,
}

// Default value functions
fn default_generator_enabled() -> bool {
    true
}

fn default_generator_model() -> String {
    "gemini-pro".to_string()
}

fn default_generator_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_generator_timeout() -> u32 {
    30
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_departure_city() -> String {
    "Berlin".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: default_generator_enabled(),
            api_key: None,
            model: default_generator_model(),
            base_url: default_generator_base_url(),
            timeout_seconds: default_generator_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
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

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            departure_city: default_departure_city(),
            language: default_language(),
        }
    }
}

impl YuletideConfig {
    /// Load configuration from `config_path`, or the default location, overlaid
    /// with environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::resolve_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // YULETIDE__GENERATOR__API_KEY and friends
        builder = builder.add_source(
            Environment::with_prefix("YULETIDE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: YuletideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.fill_api_key(std::env::var(API_KEY_ENV_VAR).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yuletide").join("config.toml"))
    }

    /// The per-user config file when present, `./config.toml` otherwise
    #[must_use]
    pub fn resolve_config_path() -> PathBuf {
        Self::get_config_path()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Use `key` when no API key was configured
    pub fn fill_api_key(&mut self, key: Option<String>) {
        if self.generator.api_key.is_none() {
            self.generator.api_key = key.filter(|k| !k.trim().is_empty());
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self
            .generator
            .api_key
            .as_ref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.generator.api_key = None;
        }
        if self.generator.model.is_empty() {
            self.generator.model = default_generator_model();
        }
        if self.generator.base_url.is_empty() {
            self.generator.base_url = default_generator_base_url();
        }
        if self.generator.timeout_seconds == 0 {
            self.generator.timeout_seconds = default_generator_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.departure_city.trim().is_empty() {
            self.defaults.departure_city = default_departure_city();
        }
        if self.defaults.language.is_empty() {
            self.defaults.language = default_language();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the backend API key when one is set
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.generator.api_key {
            if api_key.len() < 8 {
                return Err(YuletideError::config(
                    "Gemini API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 200 {
                return Err(YuletideError::config(
                    "Gemini API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.generator.timeout_seconds > 300 {
            return Err(
                YuletideError::config("Generator timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(YuletideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(YuletideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.generator.base_url.starts_with("http://")
            && !self.generator.base_url.starts_with("https://")
        {
            return Err(YuletideError::config(
                "Generator base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if !SUPPORTED_LANGUAGES.contains(&self.defaults.language.as_str()) {
            return Err(YuletideError::config(format!(
                "Unsupported default language '{}'. Must be one of: {}",
                self.defaults.language,
                SUPPORTED_LANGUAGES.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Whether plans should call the text generation backend
    #[must_use]
    pub fn backend_enabled(&self) -> bool {
        self.generator.enabled && self.generator.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = YuletideConfig::default();
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(
            config.generator.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.generator.timeout_seconds, 30);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.departure_city, "Berlin");
        assert!(config.generator.api_key.is_none());
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = YuletideConfig::default();
        config.generator.api_key = Some("short".to_string());
        let result = config.validate_api_key();
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = YuletideConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = YuletideConfig::default();
        config.generator.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_language() {
        let mut config = YuletideConfig::default();
        config.defaults.language = "es".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Unsupported default language"));
    }

    #[test]
    fn test_apply_defaults_repairs_empty_values() {
        let mut config = YuletideConfig::default();
        config.generator.api_key = Some("   ".to_string());
        config.generator.model = String::new();
        config.server.port = 0;
        config.logging.format = String::new();
        config.apply_defaults();

        assert!(config.generator.api_key.is_none());
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_api_key_fallback_does_not_override_configured_key() {
        let mut config = YuletideConfig::default();
        config.fill_api_key(Some("from-environment-key".to_string()));
        assert_eq!(
            config.generator.api_key.as_deref(),
            Some("from-environment-key")
        );

        config.fill_api_key(Some("another-environment-key".to_string()));
        assert_eq!(
            config.generator.api_key.as_deref(),
            Some("from-environment-key")
        );
        assert!(config.backend_enabled());

        config.generator.enabled = false;
        assert!(!config.backend_enabled());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[logging]\nformat = \"json\"\n\n[defaults]\nlanguage = \"fr\""
        )
        .unwrap();

        let config = YuletideConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.defaults.language, "fr");
        assert_eq!(config.defaults.departure_city, "Berlin");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[generator]\ntimeout_seconds = 900").unwrap();

        let result = YuletideConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = YuletideConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("yuletide"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
