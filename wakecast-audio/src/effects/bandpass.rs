//! Bandpass filter - fourth-order Butterworth band filter
//!
//! Implemented as a 2nd-order Butterworth high-pass at the low cutoff
//! cascaded with a 2nd-order Butterworth low-pass at the high cutoff.
//! Applied direct-form with no zero-phase correction; the resulting
//! phase distortion is accepted as part of the sound.

use super::Effect;
use std::f32::consts::{FRAC_1_SQRT_2, PI};

/// Bandpass filter parameters
#[derive(Debug, Clone, Copy)]
pub struct BandpassParams {
    pub enabled: bool,
    /// Lower cutoff frequency in Hz
    pub low_hz: f32,
    /// Upper cutoff frequency in Hz
    pub high_hz: f32,
}

impl Default for BandpassParams {
    fn default() -> Self {
        Self {
            enabled: false,
            low_hz: 300.0,
            high_hz: 5000.0,
        }
    }
}

/// Single biquad section (direct form I)
struct Biquad {
    a0: f32,
    a1: f32,
    a2: f32,
    b1: f32,
    b2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// RBJ high-pass with Butterworth Q
    fn highpass(cutoff: f32, sample_rate: f32) -> Self {
        let omega = 2.0 * PI * cutoff / sample_rate;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * FRAC_1_SQRT_2);

        let b0 = (1.0 + cos_omega) / 2.0;
        let b1 = -(1.0 + cos_omega);
        let b2 = (1.0 + cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self::normalized(b0, b1, b2, a0, a1, a2)
    }

    /// RBJ low-pass with Butterworth Q
    fn lowpass(cutoff: f32, sample_rate: f32) -> Self {
        let omega = 2.0 * PI * cutoff / sample_rate;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * FRAC_1_SQRT_2);

        let b0 = (1.0 - cos_omega) / 2.0;
        let b1 = 1.0 - cos_omega;
        let b2 = (1.0 - cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self::normalized(b0, b1, b2, a0, a1, a2)
    }

    fn normalized(b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) -> Self {
        Self {
            a0: b0 / a0,
            a1: b1 / a0,
            a2: b2 / a0,
            b1: a1 / a0,
            b2: a2 / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    #[inline]
    fn process_sample(&mut self, input: f32) -> f32 {
        let output = self.a0 * input + self.a1 * self.x1 + self.a2 * self.x2
            - self.b1 * self.y1
            - self.b2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }
}

/// Fourth-order Butterworth band filter
pub struct Bandpass {
    highpass: Biquad,
    lowpass: Biquad,
}

impl Bandpass {
    /// Create a bandpass filter for the given sample rate.
    ///
    /// Cutoffs are clamped to (20 Hz, 0.45 * sample rate) and reordered
    /// if low > high.
    pub fn new(sample_rate: u32, params: BandpassParams) -> Self {
        let sr = sample_rate as f32;
        let max_cutoff = sr * 0.45;
        let mut low = params.low_hz.clamp(20.0, max_cutoff);
        let mut high = params.high_hz.clamp(20.0, max_cutoff);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }

        Self {
            highpass: Biquad::highpass(low, sr),
            lowpass: Biquad::lowpass(high, sr),
        }
    }
}

impl Effect for Bandpass {
    fn process(&mut self, samples: &mut Vec<f32>) {
        for sample in samples.iter_mut() {
            let hp = self.highpass.process_sample(*sample);
            *sample = self.lowpass.process_sample(hp);
        }
    }

    fn name(&self) -> &'static str {
        "Bandpass"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 44100;

    fn sine(freq: f32, seconds: f32) -> Vec<f32> {
        let n = (SAMPLE_RATE as f32 * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / SAMPLE_RATE as f32).sin())
            .collect()
    }

    fn rms(samples: &[f32]) -> f32 {
        (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
    }

    #[test]
    fn test_out_of_band_attenuated() {
        let mut filter = Bandpass::new(SAMPLE_RATE, BandpassParams::default());
        let mut samples = sine(50.0, 1.0);
        let input_rms = rms(&samples);

        filter.process(&mut samples);

        // Skip the initial transient, then the 50 Hz tone should be well
        // below the 300-5000 Hz passband
        let settled = &samples[SAMPLE_RATE as usize / 4..];
        assert!(rms(settled) < input_rms * 0.2);
    }

    #[test]
    fn test_in_band_passes() {
        let mut filter = Bandpass::new(SAMPLE_RATE, BandpassParams::default());
        let mut samples = sine(1000.0, 1.0);
        let input_rms = rms(&samples);

        filter.process(&mut samples);

        let settled = &samples[SAMPLE_RATE as usize / 4..];
        assert!(rms(settled) > input_rms * 0.7);
    }

    #[test]
    fn test_length_preserved() {
        let mut filter = Bandpass::new(SAMPLE_RATE, BandpassParams::default());
        let mut samples = sine(440.0, 0.1);
        let len = samples.len();

        filter.process(&mut samples);
        assert_eq!(samples.len(), len);
    }

    #[test]
    fn test_swapped_cutoffs_reordered() {
        let params = BandpassParams {
            enabled: true,
            low_hz: 5000.0,
            high_hz: 300.0,
        };
        let mut filter = Bandpass::new(SAMPLE_RATE, params);
        let mut samples = sine(1000.0, 0.5);
        let input_rms = rms(&samples);

        filter.process(&mut samples);

        // Behaves like the 300-5000 band, so 1 kHz still passes
        let settled = &samples[SAMPLE_RATE as usize / 8..];
        assert!(rms(settled) > input_rms * 0.7);
    }
}
