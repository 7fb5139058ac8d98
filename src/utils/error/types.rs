//! Error types for the service

use crate::core::music::GenerationError;
use crate::core::translation::TranslationError;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, BeatFlowError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum BeatFlowError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Rejected user input; `code` is the stable machine-readable reason
    #[error("{message}")]
    Validation { code: &'static str, message: String },

    /// Translation requested but no provider credential is configured
    #[error("{0}")]
    TranslationDisabled(String),

    /// Translation provider failure
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// Model inference or persistence failure
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Server lifecycle errors (bind, run)
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
