//! Configuration management for the service
//!
//! Configuration is layered: an optional YAML file, then environment
//! variables, then validation of every section.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BeatFlowError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generative model configuration
    #[serde(default)]
    pub music: MusicConfig,
    /// Translation provider configuration
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Audio storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BeatFlowError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| BeatFlowError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the optional YAML file, then apply environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path).await?,
            Some(path) => {
                info!("Configuration file {:?} not found, using defaults", path);
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment-style key/value lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.server.cors.allowed_origins = CorsConfig::parse_origins(&origins);
        }

        if let Some(model) = lookup("MUSICGEN_MODEL") {
            self.music.model = model;
        }
        if let Some(url) = lookup("MUSICGEN_INFERENCE_URL") {
            self.music.inference_url = url;
        }
        if let Some(timeout) = lookup("MUSICGEN_TIMEOUT_SECS") {
            self.music.timeout_secs = parse_env("MUSICGEN_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(max) = lookup("MAX_AUDIO_SECONDS") {
            self.music.max_audio_seconds = parse_env("MAX_AUDIO_SECONDS", &max)?;
        }

        if let Some(dir) = lookup("STORAGE_DIR") {
            self.storage.dir = PathBuf::from(dir);
        }

        if let Some(url) = lookup("LINGO_API_URL") {
            self.translation.api_url = url;
        }
        if let Some(key) = lookup("LINGODOTDEV_API_KEY") {
            self.translation.api_key = Some(key).filter(|k| !k.trim().is_empty());
        }
        if let Some(locale) = lookup("LINGO_TARGET_LOCALE") {
            self.translation.target_locale = locale;
        }
        if let Some(timeout) = lookup("TRANSLATION_TIMEOUT_SECS") {
            self.translation.timeout_secs = parse_env("TRANSLATION_TIMEOUT_SECS", &timeout)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = parse_env("LOG_FORMAT", &format)?;
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| BeatFlowError::Config(format!("Server config error: {}", e)))?;
        self.music
            .validate()
            .map_err(|e| BeatFlowError::Config(format!("Music config error: {}", e)))?;
        self.translation
            .validate()
            .map_err(|e| BeatFlowError::Config(format!("Translation config error: {}", e)))?;
        self.storage
            .validate()
            .map_err(|e| BeatFlowError::Config(format!("Storage config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| BeatFlowError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Apply command-line bind overrides, then re-validate
    pub fn apply_server_overrides(&mut self, host: Option<String>, port: Option<u16>) -> Result<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self.validate()
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BeatFlowError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| BeatFlowError::Config(format!("Invalid {}: {}", key, e)))
}
