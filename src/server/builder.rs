//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{BeatFlowError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    state: Option<AppState>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration; the production backends are built from it
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use prepared state instead of building it from configuration
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        if let Some(state) = self.state {
            return Ok(HttpServer::with_state(state));
        }

        let config = self
            .config
            .ok_or_else(|| BeatFlowError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

/// Run the server with a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting BeatFlow v{}", crate::VERSION);
    info!(
        model = %config.music.model,
        inference_url = %config.music.inference_url,
        storage = %config.storage.dir.display(),
        max_audio_seconds = config.music.max_audio_seconds,
        translation_enabled = config.translation.is_enabled(),
        "Service configuration"
    );

    let server = ServerBuilder::new().with_config(config).build()?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/generate - Generate a clip");
    info!("   POST /api/translate - Translate text");
    info!("   GET  /api/library - List generated clips");

    server.start().await
}
