//! Structured request context for log lines

use crate::server::middleware::RequestId;
use crate::utils::error::BeatFlowError;
use crate::utils::logging::{preview, truncate_chars};
use actix_web::{HttpRequest, ResponseError};
use tracing::{error, info, warn};

const USER_AGENT_MAX_CHARS: usize = 120;

/// Caller details shared by every API log line
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub request_id: String,
    pub remote_addr: String,
    pub user_agent: String,
}

impl ClientInfo {
    pub fn from_request(req: &HttpRequest) -> Self {
        let user_agent = req
            .headers()
            .get(actix_web::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        Self {
            request_id: RequestId::of(req).unwrap_or_default(),
            remote_addr: req
                .peer_addr()
                .map(|addr| addr.ip().to_string())
                .unwrap_or_default(),
            user_agent: truncate_chars(user_agent, USER_AGENT_MAX_CHARS).to_string(),
        }
    }
}

/// Context for a generation request
#[derive(Debug, Clone)]
pub struct GenerationLogContext {
    pub client: ClientInfo,
    pub genre: String,
    /// Requested duration, when it parsed as an integer
    pub duration: Option<i64>,
    pub locale: String,
    pub prompt_length: usize,
    pub prompt_preview: String,
}

impl GenerationLogContext {
    pub fn new(
        client: ClientInfo,
        prompt: &str,
        genre: &str,
        duration: Option<i64>,
        locale: &str,
    ) -> Self {
        Self {
            client,
            genre: genre.to_string(),
            duration,
            locale: locale.to_string(),
            prompt_length: prompt.chars().count(),
            prompt_preview: preview(prompt),
        }
    }

    pub fn received(&self) {
        info!(
            request_id = %self.client.request_id,
            remote_addr = %self.client.remote_addr,
            user_agent = %self.client.user_agent,
            genre = %self.genre,
            duration = ?self.duration,
            locale = %self.locale,
            prompt_length = self.prompt_length,
            prompt_preview = %self.prompt_preview,
            "Received music generation request"
        );
    }

    pub fn completed(&self, audio_path: &str, translation_applied: bool) {
        info!(
            request_id = %self.client.request_id,
            genre = %self.genre,
            duration = ?self.duration,
            locale = %self.locale,
            prompt_length = self.prompt_length,
            translation_applied,
            audio = %audio_path,
            "Music generation completed successfully"
        );
    }

    /// Log `err` at a severity matching its status and hand it back
    pub fn reject(&self, err: BeatFlowError) -> BeatFlowError {
        if err.status_code().is_server_error() {
            error!(
                request_id = %self.client.request_id,
                remote_addr = %self.client.remote_addr,
                user_agent = %self.client.user_agent,
                genre = %self.genre,
                duration = ?self.duration,
                locale = %self.locale,
                prompt_length = self.prompt_length,
                prompt_preview = %self.prompt_preview,
                "Music generation request failed ({}): {}",
                err.code(),
                err
            );
        } else {
            warn!(
                request_id = %self.client.request_id,
                remote_addr = %self.client.remote_addr,
                user_agent = %self.client.user_agent,
                genre = %self.genre,
                duration = ?self.duration,
                locale = %self.locale,
                prompt_length = self.prompt_length,
                prompt_preview = %self.prompt_preview,
                "Music generation request failed ({}): {}",
                err.code(),
                err
            );
        }
        err
    }
}

/// Context for a standalone translation request
#[derive(Debug, Clone)]
pub struct TranslationLogContext {
    pub client: ClientInfo,
    pub text_length: usize,
    pub source_locale: String,
    pub target_locale: String,
}

impl TranslationLogContext {
    pub fn new(client: ClientInfo, text: &str, source_locale: &str, target_locale: &str) -> Self {
        Self {
            client,
            text_length: text.chars().count(),
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
        }
    }

    pub fn completed(&self, applied: bool) {
        info!(
            request_id = %self.client.request_id,
            text_length = self.text_length,
            source_locale = %self.source_locale,
            target_locale = %self.target_locale,
            applied,
            "Standalone translation succeeded"
        );
    }

    pub fn reject(&self, err: BeatFlowError) -> BeatFlowError {
        if err.status_code().is_server_error() {
            error!(
                request_id = %self.client.request_id,
                remote_addr = %self.client.remote_addr,
                user_agent = %self.client.user_agent,
                text_length = self.text_length,
                source_locale = %self.source_locale,
                target_locale = %self.target_locale,
                "Translation request failed ({}): {}",
                err.code(),
                err
            );
        } else {
            warn!(
                request_id = %self.client.request_id,
                remote_addr = %self.client.remote_addr,
                user_agent = %self.client.user_agent,
                text_length = self.text_length,
                source_locale = %self.source_locale,
                target_locale = %self.target_locale,
                "Translation request failed ({}): {}",
                err.code(),
                err
            );
        }
        err
    }
}
