//! Prompt translation
//!
//! Wraps the remote translation provider behind the [`Translator`] trait. The
//! generation pipeline treats failures as recoverable; the standalone
//! translation endpoint surfaces them.

mod lingo;
mod types;

pub use lingo::LingoTranslator;
pub use types::{TranslationOutcome, TranslationRequest};

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a translation provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// Connection or transport failure
    #[error("Translation request failed: {0}")]
    Network(String),

    /// The provider did not answer within the configured timeout
    #[error("Translation timed out after {0}s")]
    Timeout(u64),

    /// Non-success HTTP status from the provider
    #[error("Translation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),
}

/// A text translation capability
#[async_trait]
pub trait Translator: Send + Sync {
    /// Whether a provider credential is configured
    fn is_configured(&self) -> bool;

    /// Translate `request.text`.
    ///
    /// Returns the text unchanged, without calling the provider, when no
    /// credential is configured or the source and target locales match.
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}
