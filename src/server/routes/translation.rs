//! Standalone translation endpoint

use super::context::{ClientInfo, TranslationLogContext};
use crate::core::locale::resolve_source_locale;
use crate::core::translation::TranslationRequest;
use crate::server::state::AppState;
use crate::utils::error::{BeatFlowError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Null or absent is treated like empty text
    pub text: Option<String>,
    /// Preferred source locale; wins over `locale`
    pub source_locale: Option<String>,
    pub locale: Option<String>,
    pub target_locale: Option<String>,
}

impl TranslateRequest {
    fn preferred_locale(&self) -> &str {
        [&self.source_locale, &self.locale]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|locale| !locale.is_empty())
            .unwrap_or_default()
    }
}

/// Body of a successful `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub text: String,
    pub translated_text: String,
    pub source_locale: String,
    pub target_locale: String,
    pub applied: bool,
}

/// `POST /api/translate`
pub async fn translate_prompt(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<TranslateRequest>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    let text = body.text.as_deref().unwrap_or_default().trim();
    let target_locale = body
        .target_locale
        .as_deref()
        .filter(|locale| !locale.is_empty())
        .unwrap_or(state.config.translation.target_locale.as_str())
        .to_string();
    let source_locale = resolve_source_locale(body.preferred_locale(), &target_locale, text);

    let ctx = TranslationLogContext::new(
        ClientInfo::from_request(&req),
        text,
        &source_locale,
        &target_locale,
    );

    if text.is_empty() {
        return Err(ctx.reject(BeatFlowError::missing_text()));
    }
    if !state.translator.is_configured() {
        return Err(ctx.reject(BeatFlowError::translation_disabled()));
    }

    let request = TranslationRequest::new(text, &source_locale, &target_locale);
    let translated_text = state
        .translator
        .translate(&request)
        .await
        .map_err(|e| ctx.reject(e.into()))?;

    let applied = translated_text != text;
    ctx.completed(applied);

    Ok(HttpResponse::Ok().json(TranslateResponse {
        text: text.to_string(),
        translated_text,
        source_locale,
        target_locale,
        applied,
    }))
}
