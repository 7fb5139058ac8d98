//! Audio post-processing, persistence and analysis
//!
//! Turns raw model output into a playable, peak-normalized waveform, writes
//! it to disk and estimates its tempo.

mod tempo;
mod wav;
mod waveform;

pub use tempo::{OnsetTempoEstimator, TempoEstimator};
pub use wav::{read_wav_mono, write_wav};
pub use waveform::{AudioTensor, DEFAULT_PEAK, Waveform, normalize, prepare_waveform};

use thiserror::Error;

/// Errors raised while shaping, writing or decoding audio
#[derive(Error, Debug)]
pub enum AudioError {
    /// Model output does not have a supported layout
    #[error("Invalid audio tensor: {0}")]
    InvalidShape(String),

    /// WAV encoding or decoding failure
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}
