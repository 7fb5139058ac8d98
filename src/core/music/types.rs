//! Generation request and result types

use crate::core::translation::TranslationOutcome;
use std::path::PathBuf;

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed, non-empty prompt as submitted
    pub prompt: String,
    pub genre: String,
    /// Requested clip length in seconds
    pub duration: u32,
    /// Preferred source locale hint
    pub locale: String,
}

/// Prompt after the translation step
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPrompt {
    /// Text sent to the model
    pub prompt_used: String,
    pub translation: TranslationOutcome,
}

/// A persisted clip
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub audio_path: PathBuf,
    pub duration_seconds: u32,
    pub bpm: f64,
    /// Prompt as used for generation, after translation
    pub prompt: String,
    pub genre: String,
}

/// Everything the caller needs to answer a generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub result: GenerationResult,
    /// Prompt exactly as submitted
    pub prompt_original: String,
    pub translation: TranslationOutcome,
}

impl GenerationOutcome {
    /// Prompt as sent to the model
    pub fn prompt_used(&self) -> &str {
        &self.result.prompt
    }
}
