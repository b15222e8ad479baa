use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

pub mod storage;

pub use storage::{StorageBackend, StorageConfig};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Rate pre-selected on the calculator form
    pub default_gst_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!("Invalid LOG_FORMAT: {}", other))),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            default_gst_rate: Decimal::from(18),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse()?,
            default_gst_rate: env::var("DEFAULT_GST_RATE")
                .unwrap_or_else(|_| "18".to_string())
                .trim()
                .parse()
                .map_err(|_| AppError::configuration("Invalid DEFAULT_GST_RATE"))?,
        })
    }
}

impl Config {
    /// Load and validate configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.default_gst_rate < Decimal::ZERO
            || self.app.default_gst_rate > Decimal::ONE_HUNDRED
        {
            return Err(AppError::configuration(
                "DEFAULT_GST_RATE must be between 0 and 100",
            ));
        }

        if self.storage.records_key.trim().is_empty() {
            return Err(AppError::configuration("RECORDS_KEY must not be empty"));
        }

        Ok(())
    }
}
