//! Translation request and outcome types

use serde::{Deserialize, Serialize};

/// Text to translate between two locales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_locale: String,
    pub target_locale: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
        }
    }

    /// Source and target are the same locale, so there is nothing to do
    pub fn is_identity(&self) -> bool {
        self.source_locale == self.target_locale
    }
}

/// What happened to the prompt on its way to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    pub source_locale: String,
    pub target_locale: String,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationOutcome {
    /// Outcome before any translation is attempted
    pub fn not_applied(source_locale: impl Into<String>, target_locale: impl Into<String>) -> Self {
        Self {
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
            applied: false,
            error: None,
        }
    }
}
