//! Prompt-to-music generation
//!
//! [`MusicService`] owns the request lifecycle: locale resolution,
//! best-effort translation, lazy model acquisition, inference,
//! post-processing, persistence and tempo analysis.

mod model;
mod remote;
mod service;
mod types;

pub use model::{Device, EncodedPrompt, ModelBundle, ModelLoader, MusicModel, PromptEncoder};
pub use remote::RemoteModelLoader;
pub use service::{DEFAULT_SAMPLE_RATE, MusicService, TOKENS_PER_SECOND};
pub use types::{GenerationOutcome, GenerationRequest, GenerationResult, PreparedPrompt};

use crate::core::audio::AudioError;
use thiserror::Error;

/// Failures inside the generation pipeline.
///
/// The HTTP layer reports all of these as one opaque generation failure.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The model or its encoder could not be acquired
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Prompt encoding failed
    #[error("Prompt encoding failed: {0}")]
    Encoding(String),

    /// Model inference failed
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Waveform shaping, WAV encoding or decoding failed
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Filesystem failure while persisting audio
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Background task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}
