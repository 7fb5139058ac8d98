//! MusicGen inference sidecar client
//!
//! The model itself runs in a separate inference process. This module speaks
//! its small JSON protocol:
//!
//! - `GET  /v1/devices`      lists accelerators
//! - `POST /v1/models/load`  loads weights onto a device
//! - `POST /v1/encode`       runs the prompt processor
//! - `POST /v1/generate`     produces a raw audio tensor

use super::model::{Device, EncodedPrompt, ModelBundle, ModelLoader, MusicModel, PromptEncoder};
use super::GenerationError;
use crate::config::MusicConfig;
use crate::core::audio::AudioTensor;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared HTTP plumbing for the sidecar endpoints
#[derive(Debug, Clone)]
struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> std::result::Result<R, String> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<R, String> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<R, String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("inference server returned {}: {}", status.as_u16(), body));
        }
        response
            .json::<R>()
            .await
            .map_err(|e| format!("invalid inference response: {}", e))
    }
}

#[derive(Debug, Deserialize)]
struct DevicesResponse {
    #[serde(default)]
    accelerators: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LoadRequest<'a> {
    model: &'a str,
    device: Device,
}

#[derive(Debug, Deserialize)]
struct LoadResponse {
    #[serde(default)]
    device: Option<Device>,
    #[serde(default)]
    sampling_rate: Option<u32>,
}

#[derive(Debug, Serialize)]
struct EncodeRequest<'a> {
    model: &'a str,
    text: &'a [String],
    padding: bool,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    input_ids: &'a [Vec<i64>],
    attention_mask: &'a [Vec<i64>],
    max_new_tokens: usize,
}

/// Loads models through the inference sidecar
#[derive(Debug, Clone)]
pub struct RemoteModelLoader {
    inner: InferenceClient,
}

impl RemoteModelLoader {
    pub fn new(config: &MusicConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            inner: InferenceClient {
                client,
                base_url: config.inference_url.clone(),
            },
        })
    }

    /// Pick CUDA when the sidecar reports a CUDA accelerator
    async fn preferred_device(&self) -> Device {
        match self.inner.get_json::<DevicesResponse>("/v1/devices").await {
            Ok(devices) if devices.accelerators.iter().any(|a| a.starts_with("cuda")) => {
                Device::Cuda
            }
            Ok(_) => Device::Cpu,
            Err(e) => {
                warn!("Accelerator probe failed, falling back to CPU: {}", e);
                Device::Cpu
            }
        }
    }
}

#[async_trait]
impl ModelLoader for RemoteModelLoader {
    async fn load(&self, model_id: &str) -> std::result::Result<ModelBundle, GenerationError> {
        let device = self.preferred_device().await;
        info!(model = model_id, %device, "Loading MusicGen model");

        let loaded: LoadResponse = self
            .inner
            .post_json(
                "/v1/models/load",
                &LoadRequest {
                    model: model_id,
                    device,
                },
            )
            .await
            .map_err(GenerationError::ModelLoad)?;

        let model = Arc::new(RemoteMusicModel {
            inner: self.inner.clone(),
            model_id: model_id.to_string(),
            device: loaded.device.unwrap_or(device),
            sampling_rate: loaded.sampling_rate,
        });

        info!(
            model = model_id,
            device = %model.device,
            sampling_rate = ?model.sampling_rate,
            "MusicGen model ready"
        );

        Ok(ModelBundle {
            encoder: model.clone(),
            model,
        })
    }
}

/// A model resident in the inference sidecar
#[derive(Debug)]
struct RemoteMusicModel {
    inner: InferenceClient,
    model_id: String,
    device: Device,
    sampling_rate: Option<u32>,
}

#[async_trait]
impl PromptEncoder for RemoteMusicModel {
    async fn encode(
        &self,
        prompts: &[String],
    ) -> std::result::Result<EncodedPrompt, GenerationError> {
        self.inner
            .post_json(
                "/v1/encode",
                &EncodeRequest {
                    model: &self.model_id,
                    text: prompts,
                    padding: true,
                },
            )
            .await
            .map_err(GenerationError::Encoding)
    }
}

#[async_trait]
impl MusicModel for RemoteMusicModel {
    fn device(&self) -> Device {
        self.device
    }

    fn sampling_rate(&self) -> Option<u32> {
        self.sampling_rate
    }

    async fn generate(
        &self,
        inputs: &EncodedPrompt,
        max_new_tokens: usize,
    ) -> std::result::Result<AudioTensor, GenerationError> {
        debug!(
            model = %self.model_id,
            batch = inputs.batch_size(),
            max_new_tokens,
            "Requesting generation"
        );

        self.inner
            .post_json(
                "/v1/generate",
                &GenerateRequest {
                    model: &self.model_id,
                    input_ids: &inputs.input_ids,
                    attention_mask: &inputs.attention_mask,
                    max_new_tokens,
                },
            )
            .await
            .map_err(GenerationError::Inference)
    }
}
