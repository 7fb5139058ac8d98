//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::music::{MusicService, RemoteModelLoader};
use crate::core::translation::{LingoTranslator, Translator};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Generation pipeline, owner of the cached model
    pub music: Arc<MusicService>,
    /// Translation provider used by the standalone endpoint
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    /// Build the production state: Lingo.dev translation and the remote
    /// MusicGen backend
    pub fn new(config: Config) -> Result<Self> {
        let translator: Arc<dyn Translator> = Arc::new(LingoTranslator::new(&config.translation)?);
        let loader = Arc::new(RemoteModelLoader::new(&config.music)?);

        let music = MusicService::new(
            config.music.model.clone(),
            config.storage.dir.clone(),
            config.translation.target_locale.clone(),
            loader,
            Arc::clone(&translator),
        );

        Ok(Self::from_parts(config, music, translator))
    }

    /// Assemble state from already built components
    pub fn from_parts(config: Config, music: MusicService, translator: Arc<dyn Translator>) -> Self {
        Self {
            config: Arc::new(config),
            music: Arc::new(music),
            translator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
