// Configuration module

mod models;

pub use models::*;

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// The Gemini API credential is taken from `GOOGLE_API_KEY` only; a
    /// missing or empty key is a fatal error raised here, before any
    /// upstream call can be attempted.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(
                File::with_name(&Self::default_config_path())
                    .required(false)
            )
            // Override with environment variables (prefix: P2I_)
            .add_source(
                Environment::with_prefix("P2I")
                    .separator("_")
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let mut config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.gemini.api_key = read_api_key()?;
        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prompt2image")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

fn read_api_key() -> Result<String> {
    std::env::var("GOOGLE_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            AppError::Config("GOOGLE_API_KEY environment variable is not set".to_string())
        })
}
