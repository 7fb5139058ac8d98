//! Tempo estimation

/// Estimates the tempo of a mono signal in beats per minute
pub trait TempoEstimator: Send + Sync {
    /// Returns `0.0` when no tempo can be found (silence, too short)
    fn estimate_bpm(&self, samples: &[f32], sample_rate: u32) -> f64;
}

/// Onset-envelope autocorrelation tempo estimator.
///
/// Builds a log-energy flux envelope, autocorrelates it and picks the lag
/// with the strongest periodicity under a log-normal prior around
/// `prior_bpm`.
#[derive(Debug, Clone)]
pub struct OnsetTempoEstimator {
    pub frame_size: usize,
    pub hop_size: usize,
    pub min_bpm: f64,
    pub max_bpm: f64,
    pub prior_bpm: f64,
    /// Width of the tempo prior, in octaves
    pub prior_octaves: f64,
}

impl Default for OnsetTempoEstimator {
    fn default() -> Self {
        Self {
            frame_size: 1024,
            hop_size: 512,
            min_bpm: 30.0,
            max_bpm: 300.0,
            prior_bpm: 120.0,
            prior_octaves: 1.0,
        }
    }
}

impl OnsetTempoEstimator {
    /// Half-wave rectified log-energy difference, one value per hop
    pub fn onset_envelope(&self, samples: &[f32]) -> Vec<f64> {
        if samples.len() < self.frame_size || self.hop_size == 0 {
            return Vec::new();
        }

        let energies: Vec<f64> = samples
            .windows(self.frame_size)
            .step_by(self.hop_size)
            .map(|frame| {
                let energy =
                    frame.iter().map(|s| f64::from(*s).powi(2)).sum::<f64>() / frame.len() as f64;
                (1.0 + 1000.0 * energy).ln()
            })
            .collect();

        let mut envelope = Vec::with_capacity(energies.len());
        envelope.push(0.0);
        envelope.extend(energies.windows(2).map(|pair| (pair[1] - pair[0]).max(0.0)));
        envelope
    }

    fn prior_weight(&self, bpm: f64) -> f64 {
        let octaves = (bpm / self.prior_bpm).log2() / self.prior_octaves;
        (-0.5 * octaves * octaves).exp()
    }
}

impl TempoEstimator for OnsetTempoEstimator {
    fn estimate_bpm(&self, samples: &[f32], sample_rate: u32) -> f64 {
        if sample_rate == 0 || samples.len() < sample_rate as usize {
            return 0.0;
        }

        let envelope = self.onset_envelope(samples);
        if envelope.iter().all(|v| *v <= f64::EPSILON) {
            return 0.0;
        }

        let frames_per_minute = 60.0 * f64::from(sample_rate) / self.hop_size as f64;
        let min_lag = ((frames_per_minute / self.max_bpm).floor() as usize).max(1);
        let max_lag = ((frames_per_minute / self.min_bpm).ceil() as usize).min(envelope.len() / 2);
        if max_lag <= min_lag {
            return 0.0;
        }

        // Unbiased autocorrelation over every lag up to max_lag + 1 so the
        // peak can be interpolated against its neighbours.
        let n = envelope.len();
        let autocorr: Vec<f64> = (0..=max_lag + 1)
            .map(|lag| {
                if lag >= n {
                    return 0.0;
                }
                let sum: f64 = envelope[..n - lag]
                    .iter()
                    .zip(&envelope[lag..])
                    .map(|(a, b)| a * b)
                    .sum();
                sum / (n - lag) as f64
            })
            .collect();

        let best = (min_lag..=max_lag)
            .map(|lag| {
                let bpm = frames_per_minute / lag as f64;
                (lag, autocorr[lag] * self.prior_weight(bpm))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1));

        let Some((lag, score)) = best else {
            return 0.0;
        };
        if score <= 0.0 {
            return 0.0;
        }

        let (y0, y1, y2) = (autocorr[lag - 1], autocorr[lag], autocorr[lag + 1]);
        let curvature = y0 - 2.0 * y1 + y2;
        let offset = if curvature.abs() > f64::EPSILON {
            (0.5 * (y0 - y2) / curvature).clamp(-0.5, 0.5)
        } else {
            0.0
        };

        frames_per_minute / (lag as f64 + offset)
    }
}
