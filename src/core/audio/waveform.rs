//! Raw tensor reshaping and peak normalization

use super::AudioError;
use serde::{Deserialize, Serialize};

/// Loudness ceiling applied to every generated clip
pub const DEFAULT_PEAK: f32 = 0.95;

/// Row-major audio tensor as produced by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTensor {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl AudioTensor {
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Self {
        Self { shape, data }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

/// Interleaved `(frames, channels)` sample buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    channels: u16,
}

impl Waveform {
    /// Build a waveform from interleaved samples
    pub fn new(samples: Vec<f32>, channels: u16) -> Result<Self, AudioError> {
        if channels == 0 {
            return Err(AudioError::InvalidShape("waveform has no channels".to_string()));
        }
        if samples.len() % channels as usize != 0 {
            return Err(AudioError::InvalidShape(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self { samples, channels })
    }

    pub fn mono(samples: Vec<f32>) -> Self {
        Self {
            samples,
            channels: 1,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Sample at `frame` for `channel`
    pub fn sample(&self, frame: usize, channel: u16) -> Option<f32> {
        if channel >= self.channels {
            return None;
        }
        self.samples
            .get(frame * self.channels as usize + channel as usize)
            .copied()
    }

    /// Peak-normalize in place and return self
    pub fn normalized(mut self, peak: f32) -> Self {
        normalize(&mut self.samples, peak);
        self
    }

    pub fn peak(&self) -> f32 {
        max_abs(&self.samples)
    }
}

/// Reshape raw model output into a `(frames, channels)` waveform.
///
/// Rank 3 is `(batch, channels, frames)` and rank 2 is `(batch, frames)`;
/// only the first batch item is kept. Rank 1 is taken as mono frames.
pub fn prepare_waveform(tensor: AudioTensor) -> Result<Waveform, AudioError> {
    let expected: usize = tensor.shape.iter().product();
    if tensor.shape.is_empty() || expected != tensor.data.len() {
        return Err(AudioError::InvalidShape(format!(
            "shape {:?} does not match {} samples",
            tensor.shape,
            tensor.data.len()
        )));
    }

    match tensor.shape.as_slice() {
        &[batch, channels, frames] => {
            if batch == 0 || channels == 0 {
                return Err(AudioError::InvalidShape(format!(
                    "empty batch or channel axis in shape {:?}",
                    tensor.shape
                )));
            }
            let channel_count = u16::try_from(channels).map_err(|_| {
                AudioError::InvalidShape(format!("{} channels is out of range", channels))
            })?;

            // Batch 0 is channel-major; interleave it frame by frame.
            let first = &tensor.data[..channels * frames];
            let mut samples = Vec::with_capacity(first.len());
            for frame in 0..frames {
                for channel in 0..channels {
                    samples.push(first[channel * frames + frame]);
                }
            }
            Waveform::new(samples, channel_count)
        }
        &[batch, frames] => {
            if batch == 0 {
                return Err(AudioError::InvalidShape("empty batch axis".to_string()));
            }
            let mut data = tensor.data;
            data.truncate(frames);
            Ok(Waveform::mono(data))
        }
        &[_] => Ok(Waveform::mono(tensor.data)),
        _ => Err(AudioError::InvalidShape(format!(
            "unsupported rank {}",
            tensor.rank()
        ))),
    }
}

/// Scale `samples` so the loudest one sits at `peak`.
///
/// A silent buffer is left untouched.
pub fn normalize(samples: &mut [f32], peak: f32) {
    let max = max_abs(samples);
    let divisor = if max > 0.0 { max } else { 1.0 };
    let gain = peak / divisor;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}

fn max_abs(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
}
