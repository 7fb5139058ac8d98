//! Generation orchestrator

use super::model::{ModelBundle, ModelLoader};
use super::types::{GenerationOutcome, GenerationRequest, GenerationResult, PreparedPrompt};
use super::GenerationError;
use crate::core::audio::{
    AudioTensor, DEFAULT_PEAK, OnsetTempoEstimator, TempoEstimator, prepare_waveform,
    read_wav_mono, write_wav,
};
use crate::core::locale::resolve_source_locale;
use crate::core::translation::{TranslationOutcome, TranslationRequest, Translator};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Generation steps per second of requested audio
pub const TOKENS_PER_SECOND: usize = 100;

/// Sample rate used when the model does not declare one
pub const DEFAULT_SAMPLE_RATE: u32 = 32_000;

/// Owns the model and drives a request from prompt to persisted clip.
///
/// Built once at startup and shared between handlers. The model bundle is
/// acquired on first use; concurrent first calls wait on the same
/// initialization and a failed initialization is retried on the next call.
pub struct MusicService {
    model_id: String,
    storage_dir: PathBuf,
    target_locale: String,
    loader: Arc<dyn ModelLoader>,
    translator: Arc<dyn Translator>,
    tempo: Arc<dyn TempoEstimator>,
    bundle: OnceCell<ModelBundle>,
}

impl std::fmt::Debug for MusicService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicService")
            .field("model_id", &self.model_id)
            .field("storage_dir", &self.storage_dir)
            .field("target_locale", &self.target_locale)
            .field("model_loaded", &self.is_model_loaded())
            .finish()
    }
}

impl MusicService {
    pub fn new(
        model_id: impl Into<String>,
        storage_dir: impl Into<PathBuf>,
        target_locale: impl Into<String>,
        loader: Arc<dyn ModelLoader>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            storage_dir: storage_dir.into(),
            target_locale: target_locale.into(),
            loader,
            translator,
            tempo: Arc::new(OnsetTempoEstimator::default()),
            bundle: OnceCell::new(),
        }
    }

    /// Replace the default tempo estimator
    pub fn with_tempo_estimator(mut self, tempo: Arc<dyn TempoEstimator>) -> Self {
        self.tempo = tempo;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn target_locale(&self) -> &str {
        &self.target_locale
    }

    pub fn is_model_loaded(&self) -> bool {
        self.bundle.initialized()
    }

    /// Get the cached model bundle, loading it on first use
    pub async fn bundle(&self) -> Result<&ModelBundle, GenerationError> {
        self.bundle
            .get_or_try_init(|| async {
                info!(model = %self.model_id, "Initializing MusicGen model");
                let bundle = self.loader.load(&self.model_id).await?;
                info!(
                    model = %self.model_id,
                    device = %bundle.model.device(),
                    "MusicGen model initialized"
                );
                Ok::<_, GenerationError>(bundle)
            })
            .await
    }

    /// Translate `prompt` into the target locale when needed.
    ///
    /// Never fails: a provider error is logged and recorded in the outcome,
    /// and the original prompt is used.
    pub async fn prepare_prompt(&self, prompt: &str, locale: &str) -> PreparedPrompt {
        let source_locale = resolve_source_locale(locale, &self.target_locale, prompt);
        let mut translation = TranslationOutcome::not_applied(&source_locale, &self.target_locale);

        if source_locale == self.target_locale || !self.translator.is_configured() {
            return PreparedPrompt {
                prompt_used: prompt.to_string(),
                translation,
            };
        }

        let request = TranslationRequest::new(prompt, &source_locale, &self.target_locale);
        match self.translator.translate(&request).await {
            Ok(translated) => {
                debug!(
                    source = %source_locale,
                    target = %self.target_locale,
                    "Prompt translated"
                );
                translation.applied = true;
                PreparedPrompt {
                    prompt_used: translated,
                    translation,
                }
            }
            Err(e) => {
                error!(
                    source = %source_locale,
                    target = %self.target_locale,
                    "Prompt translation failed: {}",
                    e
                );
                translation.error = Some(e.to_string());
                PreparedPrompt {
                    prompt_used: prompt.to_string(),
                    translation,
                }
            }
        }
    }

    /// Generate, persist and analyze a clip for an already prepared prompt
    pub async fn generate_clip(
        &self,
        prompt: &str,
        genre: &str,
        duration: u32,
    ) -> Result<GenerationResult, GenerationError> {
        let bundle = self.bundle().await?;

        let inputs = bundle.encoder.encode(&[prompt.to_string()]).await?;
        let max_new_tokens = duration as usize * TOKENS_PER_SECOND;
        let tensor = bundle.model.generate(&inputs, max_new_tokens).await?;
        let sample_rate = bundle.model.sampling_rate().unwrap_or(DEFAULT_SAMPLE_RATE);

        let audio_path = self
            .storage_dir
            .join(format!("musicgen_{}.wav", Uuid::new_v4().simple()));
        let tempo = Arc::clone(&self.tempo);

        let (audio_path, bpm) = tokio::task::spawn_blocking(move || {
            persist_and_analyze(tensor, &audio_path, sample_rate, tempo.as_ref())
                .map(|bpm| (audio_path, bpm))
        })
        .await
        .map_err(|e| GenerationError::Task(e.to_string()))??;

        info!(
            path = %audio_path.display(),
            duration,
            bpm,
            sample_rate,
            "Generated clip"
        );

        Ok(GenerationResult {
            audio_path,
            duration_seconds: duration,
            bpm,
            prompt: prompt.to_string(),
            genre: genre.to_string(),
        })
    }

    /// Run the whole pipeline for a validated request
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        let prepared = self.prepare_prompt(&request.prompt, &request.locale).await;
        let result = self
            .generate_clip(&prepared.prompt_used, &request.genre, request.duration)
            .await?;

        Ok(GenerationOutcome {
            result,
            prompt_original: request.prompt.clone(),
            translation: prepared.translation,
        })
    }
}

/// Shape, normalize and write the tensor, then measure tempo from the file on disk
fn persist_and_analyze(
    tensor: AudioTensor,
    path: &Path,
    sample_rate: u32,
    tempo: &dyn TempoEstimator,
) -> Result<f64, GenerationError> {
    let waveform = prepare_waveform(tensor)?.normalized(DEFAULT_PEAK);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_wav(path, &waveform, sample_rate)?;

    let (samples, decoded_rate) = read_wav_mono(path)?;
    Ok(tempo.estimate_bpm(&samples, decoded_rate))
}
