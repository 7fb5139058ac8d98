//! Configuration validators
//!
//! Validation implementations for each configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check that `value` is an absolute http(s) URL with a host
pub fn validate_http_url(value: &str, context: &str) -> Result<(), String> {
    let url =
        Url::parse(value).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            ));
        }
    }

    if url.host_str().is_none() {
        return Err(format!("{} URL must have a valid host", context));
    }

    Ok(())
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }
        for origin in self.allowed_origins.iter().filter(|origin| *origin != "*") {
            validate_http_url(origin, "CORS origin")?;
        }
        Ok(())
    }
}

impl Validate for MusicConfig {
    fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model identifier cannot be empty".to_string());
        }

        validate_http_url(&self.inference_url, "Inference URL")?;

        if self.timeout_secs == 0 {
            return Err("Inference timeout must be greater than 0".to_string());
        }

        if self.max_audio_seconds == 0 {
            return Err("Max audio seconds must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Validate for TranslationConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url(&self.api_url, "Translation API URL")?;

        if self.target_locale.trim().is_empty() {
            return Err("Target locale cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Translation timeout must be greater than 0".to_string());
        }

        if !self.is_enabled() {
            debug!("No translation credential configured; prompts are used as submitted");
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.dir.as_os_str().is_empty() {
            return Err("Storage directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
