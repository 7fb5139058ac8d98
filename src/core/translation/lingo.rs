//! Lingo.dev translation client

use super::{TranslationError, TranslationRequest, Translator};
use crate::config::TranslationConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the Lingo.dev localization engine
#[derive(Debug, Clone)]
pub struct LingoTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocalizeTextRequest<'a> {
    text: &'a str,
    source_locale: &'a str,
    target_locale: &'a str,
    fast: bool,
}

impl LingoTranslator {
    /// Create a translator from configuration
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let timeout = config.timeout();
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            timeout,
        })
    }

    fn map_send_error(&self, error: reqwest::Error) -> TranslationError {
        if error.is_timeout() {
            TranslationError::Timeout(self.timeout.as_secs())
        } else {
            TranslationError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Translator for LingoTranslator {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> std::result::Result<String, TranslationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(request.text.clone());
        };
        if request.is_identity() {
            return Ok(request.text.clone());
        }

        debug!(
            source = %request.source_locale,
            target = %request.target_locale,
            "Sending text to translation provider"
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&LocalizeTextRequest {
                text: &request.text,
                source_locale: &request.source_locale,
                target_locale: &request.target_locale,
                fast: true,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(TranslationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        Ok(extract_translated_text(payload, &request.text))
    }
}

/// Pull the translated text out of a provider payload.
///
/// Accepts a bare JSON string or an object with a string `text` field; any
/// other shape yields `original` unchanged.
pub(crate) fn extract_translated_text(payload: Value, original: &str) -> String {
    match payload {
        Value::String(text) => text,
        Value::Object(mut map) => match map.remove("text") {
            Some(Value::String(text)) => text,
            _ => original.to_string(),
        },
        _ => original.to_string(),
    }
}
