//! Mono waveform - decoded samples plus sample rate

/// A decoded mono audio signal.
///
/// Samples are normalized f32 in the -1.0 to 1.0 range. Effects mutate
/// the sample buffer in place; the sample rate is never changed by the
/// pipeline.
#[derive(Debug, Clone, Default)]
pub struct Waveform {
    /// Mono samples (f32, normalized to -1.0 to 1.0)
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Waveform {
    /// Create a waveform from samples and a sample rate
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the waveform contains no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Peak absolute amplitude
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0f32, f32::max)
    }

    /// Root-mean-square amplitude
    pub fn rms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f32 = self.samples.iter().map(|s| s * s).sum();
        (sum_sq / self.samples.len() as f32).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_waveform() {
        let w = Waveform::default();
        assert!(w.is_empty());
        assert_eq!(w.duration_secs(), 0.0);
        assert_eq!(w.peak(), 0.0);
        assert_eq!(w.rms(), 0.0);
    }

    #[test]
    fn test_duration() {
        let w = Waveform::new(vec![0.0; 44100], 44100);
        assert!((w.duration_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_peak_and_rms() {
        let w = Waveform::new(vec![0.5, -0.8, 0.1], 44100);
        assert_eq!(w.peak(), 0.8);
        assert!(w.rms() > 0.0);
    }
}
