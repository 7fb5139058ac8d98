//! Translation provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Translation provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Provider endpoint
    #[serde(default = "default_translation_url")]
    pub api_url: String,
    /// Provider credential; translation is disabled without it
    #[serde(default)]
    pub api_key: Option<String>,
    /// Locale prompts are translated into
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: default_translation_url(),
            api_key: None,
            target_locale: default_target_locale(),
            timeout_secs: default_translation_timeout(),
        }
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether a non-blank credential is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("target_locale", &self.target_locale)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
