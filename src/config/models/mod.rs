//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod logging;
pub mod music;
pub mod server;
pub mod storage;
pub mod translation;

// Re-export all configuration types
pub use logging::*;
pub use music::*;
pub use server::*;
pub use storage::*;
pub use translation::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum JSON body size in bytes
pub fn default_max_body_size() -> usize {
    64 * 1024
}

/// Default generative model identifier
pub fn default_model() -> String {
    "facebook/musicgen-small".to_string()
}

/// Default inference sidecar base URL
pub fn default_inference_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

/// Default inference timeout in seconds
pub fn default_inference_timeout() -> u64 {
    300
}

/// Default upper bound on requested clip length, in seconds
pub fn default_max_audio_seconds() -> u32 {
    10
}

/// Default translation endpoint
pub fn default_translation_url() -> String {
    "https://api.lingo.dev/v1/translate".to_string()
}

/// Default locale prompts are translated into
pub fn default_target_locale() -> String {
    crate::core::locale::DEFAULT_TARGET_LOCALE.to_string()
}

/// Default translation timeout in seconds
pub fn default_translation_timeout() -> u64 {
    15
}

/// Default audio storage directory
pub fn default_storage_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("storage")
}

/// Default log verbosity
pub fn default_log_level() -> String {
    "info".to_string()
}
