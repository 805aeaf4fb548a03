//! Application configuration.

use crate::error::{AppError, AppResult};
use quoter_registry::{InstrumentConfig, RegistryConfig};
use quoter_telemetry::StepLogger;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "QUOTER_CONFIG";

/// Config file used when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Step record settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Character budget for one step record. Default: 3750.
    #[serde(default = "default_max_log_length")]
    pub max_log_length: usize,
}

fn default_max_log_length() -> usize {
    StepLogger::DEFAULT_MAX_LOG_LENGTH
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            max_log_length: default_max_log_length(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Traded instruments. Omitted table means the single resin instrument.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<InstrumentConfig>,
}

fn default_instruments() -> Vec<InstrumentConfig> {
    RegistryConfig::default().instruments
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            telemetry: TelemetryConfig::default(),
            instruments: default_instruments(),
        }
    }
}

impl AppConfig {
    /// Load from `QUOTER_CONFIG` or the default path, falling back to
    /// built-in defaults when the file does not exist.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        tracing::info!(config_path = %config_path, "Loading configuration");
        Self::load_or_default(&config_path)
    }

    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Instrument table in the shape the registry builder expects.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            instruments: self.instruments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoter_core::Price;
    use quoter_mm::{FairValueConfig, MakerParams};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.telemetry.max_log_length, 3750);
        assert_eq!(config.instruments.len(), 1);

        let resin = &config.instruments[0];
        assert_eq!(resin.symbol, "RAINFOREST_RESIN");
        assert_eq!(resin.params, MakerParams::new(50, 15, 2, 0));
        assert_eq!(
            resin.fair_value,
            FairValueConfig::Constant {
                price: Price::new(10000)
            }
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[telemetry]
max_log_length = 2000

[[instruments]]
symbol = "KELP"
limit = 50
custom_limit = 10
spread = 1
fair_value = { kind = "mid_price" }
"#;
        let config = AppConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.telemetry.max_log_length, 2000);
        assert_eq!(config.instruments.len(), 1);
        assert_eq!(config.instruments[0].symbol, "KELP");
        assert_eq!(config.instruments[0].params.liquidate_val, 0);
        assert_eq!(
            config.instruments[0].fair_value,
            FairValueConfig::MidPrice { fallback: None }
        );
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = AppConfig::from_toml("[[instruments]]\nsymbol = 3").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_config_error() {
        let err = AppConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_registry_config_mirrors_instruments() {
        let config = AppConfig::default();
        assert_eq!(config.registry_config(), RegistryConfig::default());
    }
}
