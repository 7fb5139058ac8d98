//! Helper functions for creating specific error types

use super::types::BeatFlowError;

/// Stable error codes surfaced in `{error, code}` bodies
pub mod codes {
    pub const MISSING_PROMPT: &str = "MISSING_PROMPT";
    pub const DURATION_TOO_LONG: &str = "DURATION_TOO_LONG";
    pub const INVALID_DURATION: &str = "INVALID_DURATION";
    pub const MISSING_TEXT: &str = "MISSING_TEXT";
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const TRANSLATION_DISABLED: &str = "TRANSLATION_DISABLED";
    pub const TRANSLATION_FAILED: &str = "TRANSLATION_FAILED";
    pub const GENERATION_FAILED: &str = "GENERATION_FAILED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

impl BeatFlowError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation<S: Into<String>>(code: &'static str, message: S) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn missing_prompt() -> Self {
        Self::validation(codes::MISSING_PROMPT, "Prompt is required")
    }

    pub fn duration_too_long(max_seconds: u32) -> Self {
        Self::validation(
            codes::DURATION_TOO_LONG,
            format!("Duration must be <= {}", max_seconds),
        )
    }

    pub fn invalid_duration<S: Into<String>>(message: S) -> Self {
        Self::validation(codes::INVALID_DURATION, message)
    }

    pub fn missing_text() -> Self {
        Self::validation(codes::MISSING_TEXT, "Text is required")
    }

    pub fn invalid_json<S: Into<String>>(message: S) -> Self {
        Self::validation(codes::INVALID_JSON, message)
    }

    pub fn translation_disabled() -> Self {
        Self::TranslationDisabled("Lingo translation is not configured".to_string())
    }

    /// Machine-readable code for the `{error, code}` body
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => *code,
            Self::TranslationDisabled(_) => codes::TRANSLATION_DISABLED,
            Self::Translation(_) => codes::TRANSLATION_FAILED,
            Self::Generation(_) => codes::GENERATION_FAILED,
            _ => codes::INTERNAL_ERROR,
        }
    }

    /// Whether the caller can fix the request and retry
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
