//! Generative model seam

use super::GenerationError;
use crate::core::audio::AudioTensor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where the model runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Cuda => f.write_str("cuda"),
        }
    }
}

/// Padded token batch produced by a [`PromptEncoder`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPrompt {
    pub input_ids: Vec<Vec<i64>>,
    pub attention_mask: Vec<Vec<i64>>,
}

impl EncodedPrompt {
    pub fn batch_size(&self) -> usize {
        self.input_ids.len()
    }
}

/// Turns text prompts into model inputs
#[async_trait]
pub trait PromptEncoder: Send + Sync {
    async fn encode(&self, prompts: &[String]) -> Result<EncodedPrompt, GenerationError>;
}

/// A loaded text-to-music model
#[async_trait]
pub trait MusicModel: Send + Sync {
    /// Device the weights were placed on
    fn device(&self) -> Device;

    /// Output sample rate declared by the audio encoder, if known
    fn sampling_rate(&self) -> Option<u32>;

    /// Generate at most `max_new_tokens` audio tokens for `inputs`
    async fn generate(
        &self,
        inputs: &EncodedPrompt,
        max_new_tokens: usize,
    ) -> Result<AudioTensor, GenerationError>;
}

/// Model and encoder acquired together
#[derive(Clone)]
pub struct ModelBundle {
    pub model: Arc<dyn MusicModel>,
    pub encoder: Arc<dyn PromptEncoder>,
}

impl fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBundle")
            .field("device", &self.model.device())
            .field("sampling_rate", &self.model.sampling_rate())
            .finish()
    }
}

/// Acquires a model bundle; called once per service instance
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self, model_id: &str) -> Result<ModelBundle, GenerationError>;
}
