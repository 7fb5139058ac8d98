//! # BeatFlow
//!
//! Prompt-to-music HTTP service. A request carries a text prompt and a genre;
//! the service translates the prompt when needed (never blocking on the
//! translation provider), drives a MusicGen model, peak-normalizes the
//! result, stores it as a WAV file and estimates its tempo.
//!
//! ## Endpoints
//!
//! - `POST /api/generate` generate and store a clip
//! - `POST /api/translate` translate text with the configured provider
//! - `GET /api/library` list stored clips, newest first
//! - `GET /health` liveness and configured model
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use beatflow::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Some(std::path::Path::new("config/beatflow.yaml"))).await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use core::audio::{OnsetTempoEstimator, TempoEstimator};
pub use core::music::{
    GenerationError, GenerationOutcome, GenerationRequest, GenerationResult, ModelLoader,
    MusicModel, MusicService, PromptEncoder, RemoteModelLoader,
};
pub use core::translation::{
    LingoTranslator, TranslationError, TranslationOutcome, TranslationRequest, Translator,
};
pub use utils::error::{BeatFlowError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information stamped by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Unix seconds
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
