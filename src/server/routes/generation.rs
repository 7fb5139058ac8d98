//! Music generation endpoint

use super::context::{ClientInfo, GenerationLogContext};
use crate::core::music::GenerationRequest;
use crate::core::translation::TranslationOutcome;
use crate::server::state::AppState;
use crate::utils::error::{BeatFlowError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Genre used when the request names none
pub const DEFAULT_GENRE: &str = "global";

/// Clip length in seconds used when the request names none
pub const DEFAULT_DURATION: i64 = 30;

/// Locale hint used when the request names none
pub const DEFAULT_LOCALE: &str = "en";

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateMusicRequest {
    /// Null or absent is treated like an empty prompt
    pub prompt: Option<String>,
    pub genre: Option<String>,
    /// Kept loose so a malformed value maps to `INVALID_DURATION`
    pub duration: Option<Value>,
    pub locale: Option<String>,
}

/// Body of a successful `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMusicResponse {
    pub audio_path: String,
    pub duration: u32,
    pub bpm: f64,
    pub prompt: String,
    pub prompt_original: String,
    pub prompt_used: String,
    pub genre: String,
    pub locale: String,
    pub translation: TranslationOutcome,
}

/// Interpret a JSON duration as whole seconds.
///
/// Absent or null means the default; integral numbers and numeric strings
/// are accepted; anything else is rejected.
pub fn parse_duration(value: Option<&Value>) -> Result<i64> {
    let invalid = || BeatFlowError::invalid_duration("Duration must be an integer number of seconds");

    match value {
        None | Some(Value::Null) => Ok(DEFAULT_DURATION),
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_i64() {
                Ok(n)
            } else if let Some(f) = number.as_f64().filter(|f| f.fract() == 0.0) {
                if f.abs() < i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(invalid())
                }
            } else {
                Err(invalid())
            }
        }
        Some(Value::String(text)) => text.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Check a parsed duration against the configured maximum
pub fn validate_duration(duration: i64, max_seconds: u32) -> Result<u32> {
    if duration <= 0 {
        return Err(BeatFlowError::invalid_duration("Duration must be positive"));
    }
    if duration > i64::from(max_seconds) {
        return Err(BeatFlowError::duration_too_long(max_seconds));
    }
    u32::try_from(duration).map_err(|_| BeatFlowError::duration_too_long(max_seconds))
}

/// `POST /api/generate`
pub async fn generate_music(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<GenerateMusicRequest>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    let prompt = body.prompt.as_deref().unwrap_or_default().trim().to_string();
    let genre = body.genre.unwrap_or_else(|| DEFAULT_GENRE.to_string());
    let locale = body.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let duration = parse_duration(body.duration.as_ref());

    let ctx = GenerationLogContext::new(
        ClientInfo::from_request(&req),
        &prompt,
        &genre,
        duration.as_ref().ok().copied(),
        &locale,
    );
    ctx.received();

    if prompt.is_empty() {
        return Err(ctx.reject(BeatFlowError::missing_prompt()));
    }
    let duration = duration
        .and_then(|d| validate_duration(d, state.config.music.max_audio_seconds))
        .map_err(|e| ctx.reject(e))?;

    let request = GenerationRequest {
        prompt,
        genre,
        duration,
        locale,
    };

    let outcome = state
        .music
        .generate(&request)
        .await
        .map_err(|e| ctx.reject(e.into()))?;

    if outcome.translation.applied {
        info!(
            request_id = %ctx.client.request_id,
            original_length = outcome.prompt_original.chars().count(),
            translated_length = outcome.prompt_used().chars().count(),
            "Prompt translation applied"
        );
    }

    let response = GenerateMusicResponse {
        audio_path: outcome.result.audio_path.display().to_string(),
        duration: outcome.result.duration_seconds,
        bpm: outcome.result.bpm,
        prompt: outcome.result.prompt.clone(),
        prompt_original: outcome.prompt_original.clone(),
        prompt_used: outcome.prompt_used().to_string(),
        genre: outcome.result.genre.clone(),
        locale: request.locale,
        translation: outcome.translation,
    };

    ctx.completed(&response.audio_path, response.translation.applied);
    Ok(HttpResponse::Created().json(response))
}
