//! WAV persistence

use super::{AudioError, Waveform};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use tracing::debug;

/// Write `waveform` as a 32-bit float WAV file
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    waveform: &Waveform,
    sample_rate: u32,
) -> Result<(), AudioError> {
    let spec = WavSpec {
        channels: waveform.channels(),
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for sample in waveform.samples() {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;

    debug!(
        path = %path.as_ref().display(),
        frames = waveform.frames(),
        channels = waveform.channels(),
        sample_rate,
        "Wrote WAV file"
    );
    Ok(())
}

/// Decode a WAV file into mono samples, returning them with the sample rate.
///
/// Multi-channel audio is averaged down to one channel.
pub fn read_wav_mono<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32), AudioError> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let bits = u32::from(spec.bits_per_sample.max(2));
            let scale = ((1i64 << (bits - 1)) - 1) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec.sample_rate))
}
