//! Test fixtures

use actix_web::web;
use beatflow::config::Config;
use beatflow::core::music::{ModelLoader, MusicService};
use beatflow::core::translation::Translator;
use beatflow::server::AppState;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Configuration pointing at a private temporary storage directory
pub struct TestContext {
    pub dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = Config::default();
        // Not created up front: the pipeline and the library must cope.
        config.storage.dir = dir.path().join("storage");
        config.music.model = "facebook/musicgen-small".to_string();
        config.music.max_audio_seconds = 10;
        config.translation.target_locale = "en".to_string();
        Self { dir, config }
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.config.storage.dir.clone()
    }

    /// Application state built around the given collaborators
    pub fn state(
        &self,
        loader: Arc<dyn ModelLoader>,
        translator: Arc<dyn Translator>,
    ) -> web::Data<AppState> {
        let music = MusicService::new(
            self.config.music.model.clone(),
            self.config.storage.dir.clone(),
            self.config.translation.target_locale.clone(),
            loader,
            Arc::clone(&translator),
        );
        web::Data::new(AppState::from_parts(self.config.clone(), music, translator))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Body for `POST /api/generate`
pub fn generate_body(prompt: &str, genre: &str, duration: u32, locale: &str) -> Value {
    json!({
        "prompt": prompt,
        "genre": genre,
        "duration": duration,
        "locale": locale,
    })
}
