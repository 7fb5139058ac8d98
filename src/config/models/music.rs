//! Music generation configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Model identifier passed to the inference backend
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the MusicGen inference sidecar
    #[serde(default = "default_inference_url")]
    pub inference_url: String,
    /// Inference request timeout in seconds
    #[serde(default = "default_inference_timeout")]
    pub timeout_secs: u64,
    /// Longest clip a caller may request, in seconds
    #[serde(default = "default_max_audio_seconds")]
    pub max_audio_seconds: u32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            inference_url: default_inference_url(),
            timeout_secs: default_inference_timeout(),
            max_audio_seconds: default_max_audio_seconds(),
        }
    }
}

impl MusicConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
