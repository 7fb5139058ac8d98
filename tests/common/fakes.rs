//! Fake collaborators for the generation pipeline

use async_trait::async_trait;
use beatflow::core::audio::AudioTensor;
use beatflow::core::music::{
    Device, EncodedPrompt, GenerationError, ModelBundle, ModelLoader, MusicModel, PromptEncoder,
    TOKENS_PER_SECOND,
};
use beatflow::core::translation::{TranslationError, TranslationRequest, Translator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Model that renders a click track at a fixed tempo for the requested length
pub struct ClickTrackModel {
    pub bpm: f64,
    pub sample_rate: u32,
    pub prompts: Mutex<Vec<String>>,
}

impl ClickTrackModel {
    fn render(&self, seconds: usize) -> Vec<f32> {
        let total = seconds * self.sample_rate as usize;
        let period = (60.0 / self.bpm * f64::from(self.sample_rate)) as usize;
        let mut samples = vec![0.0f32; total];
        for start in (0..total).step_by(period.max(1)) {
            for (i, sample) in samples[start..(start + 200).min(total)].iter_mut().enumerate() {
                // Raw model output is not normalized.
                *sample = 3.0 * (1.0 - i as f32 / 200.0) * if i % 2 == 0 { 1.0 } else { -1.0 };
            }
        }
        samples
    }
}

#[async_trait]
impl PromptEncoder for ClickTrackModel {
    async fn encode(&self, prompts: &[String]) -> Result<EncodedPrompt, GenerationError> {
        self.prompts.lock().unwrap().extend(prompts.iter().cloned());
        Ok(EncodedPrompt {
            input_ids: prompts.iter().map(|p| vec![p.len() as i64, 1]).collect(),
            attention_mask: prompts.iter().map(|_| vec![1, 1]).collect(),
        })
    }
}

#[async_trait]
impl MusicModel for ClickTrackModel {
    fn device(&self) -> Device {
        Device::Cpu
    }

    fn sampling_rate(&self) -> Option<u32> {
        Some(self.sample_rate)
    }

    async fn generate(
        &self,
        _inputs: &EncodedPrompt,
        max_new_tokens: usize,
    ) -> Result<AudioTensor, GenerationError> {
        let samples = self.render(max_new_tokens / TOKENS_PER_SECOND);
        Ok(AudioTensor::new(vec![1, 1, samples.len()], samples))
    }
}

/// Loader handing out a shared [`ClickTrackModel`]
pub struct ClickTrackLoader {
    pub model: Arc<ClickTrackModel>,
    pub loads: AtomicUsize,
}

impl ClickTrackLoader {
    pub fn new(bpm: f64) -> Self {
        Self {
            model: Arc::new(ClickTrackModel {
                bpm,
                sample_rate: 32_000,
                prompts: Mutex::new(Vec::new()),
            }),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Prompts the model was asked to encode
    pub fn prompts(&self) -> Vec<String> {
        self.model.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelLoader for ClickTrackLoader {
    async fn load(&self, _model_id: &str) -> Result<ModelBundle, GenerationError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(ModelBundle {
            model: self.model.clone(),
            encoder: self.model.clone(),
        })
    }
}

/// Loader that always fails
pub struct FailingLoader(pub String);

#[async_trait]
impl ModelLoader for FailingLoader {
    async fn load(&self, _model_id: &str) -> Result<ModelBundle, GenerationError> {
        Err(GenerationError::ModelLoad(self.0.clone()))
    }
}

/// Translator returning a scripted result and counting calls
pub struct ScriptedTranslator {
    configured: bool,
    result: Result<String, TranslationError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<TranslationRequest>>,
}

impl ScriptedTranslator {
    /// No credential: the pipeline must not call it
    pub fn unconfigured() -> Self {
        Self::new(false, Ok(String::new()))
    }

    pub fn succeeding(text: &str) -> Self {
        Self::new(true, Ok(text.to_string()))
    }

    pub fn failing(error: TranslationError) -> Self {
        Self::new(true, Err(error))
    }

    fn new(configured: bool, result: Result<String, TranslationError>) -> Self {
        Self {
            configured,
            result,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}
