//! Pitch shift - phase vocoder time stretch plus resampling
//!
//! Shifting by N semitones without changing duration is done in two
//! steps: an STFT phase vocoder stretches time by 2^(N/12), then linear
//! resampling by the same ratio restores the original length, leaving
//! only the pitch changed.
//!
//! The vocoder uses a Hann window with 75% overlap and per-bin phase
//! accumulation from the measured instantaneous frequency.

use super::Effect;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

/// FFT frame size for the vocoder
const FFT_SIZE: usize = 2048;

/// Analysis hop (75% overlap)
const HOP: usize = FFT_SIZE / 4;

/// Pitch shift parameters
#[derive(Debug, Clone, Copy)]
pub struct PitchShiftParams {
    pub enabled: bool,
    /// Shift in semitones, clamped to -12.0 to +12.0
    pub semitones: f32,
}

impl Default for PitchShiftParams {
    fn default() -> Self {
        Self {
            enabled: false,
            semitones: -3.0,
        }
    }
}

/// Offline phase-vocoder pitch shifter
pub struct PitchShifter {
    semitones: f32,
    fft: Arc<dyn Fft<f32>>,
    ifft: Arc<dyn Fft<f32>>,
}

impl PitchShifter {
    pub fn new(_sample_rate: u32, params: PitchShiftParams) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            semitones: params.semitones.clamp(-12.0, 12.0),
            fft: planner.plan_fft_forward(FFT_SIZE),
            ifft: planner.plan_fft_inverse(FFT_SIZE),
        }
    }

    /// Current shift in semitones
    pub fn semitones(&self) -> f32 {
        self.semitones
    }

    /// Time-stretch the input by `stretch` (output duration = input * stretch)
    fn time_stretch(&self, input: &[f32], stretch: f32) -> Vec<f32> {
        let hop_synth = (HOP as f32 * stretch).round().max(1.0) as usize;

        let window: Vec<f32> = (0..FFT_SIZE)
            .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f32 / FFT_SIZE as f32).cos())
            .collect();

        // Zero-pad so the last frames see silence instead of truncating
        let mut padded = input.to_vec();
        padded.resize(input.len() + FFT_SIZE, 0.0);

        let num_frames = (padded.len() - FFT_SIZE) / HOP + 1;
        let out_len = (num_frames - 1) * hop_synth + FFT_SIZE;

        let mut output = vec![0.0f32; out_len];
        let mut norm = vec![0.0f32; out_len];

        let mut prev_phase = vec![0.0f32; FFT_SIZE];
        let mut phase_acc = vec![0.0f32; FFT_SIZE];
        let mut spectrum = vec![Complex::new(0.0f32, 0.0f32); FFT_SIZE];

        for frame_idx in 0..num_frames {
            let start = frame_idx * HOP;
            for (i, slot) in spectrum.iter_mut().enumerate() {
                *slot = Complex::new(padded[start + i] * window[i], 0.0);
            }
            self.fft.process(&mut spectrum);

            // Phase propagation: measured bin frequency scaled to the
            // synthesis hop
            for (k, bin) in spectrum.iter_mut().enumerate() {
                let mag = bin.norm();
                let phase = bin.arg();

                let expected = 2.0 * PI * k as f32 * HOP as f32 / FFT_SIZE as f32;
                let delta = princarg(phase - prev_phase[k] - expected);
                prev_phase[k] = phase;

                if frame_idx == 0 {
                    phase_acc[k] = phase;
                } else {
                    let advance = (expected + delta) * (hop_synth as f32 / HOP as f32);
                    phase_acc[k] = princarg(phase_acc[k] + advance);
                }

                *bin = Complex::from_polar(mag, phase_acc[k]);
            }

            self.ifft.process(&mut spectrum);

            // Windowed overlap-add; rustfft's inverse is unnormalized
            let out_start = frame_idx * hop_synth;
            let inv_n = 1.0 / FFT_SIZE as f32;
            for i in 0..FFT_SIZE {
                output[out_start + i] += spectrum[i].re * inv_n * window[i];
                norm[out_start + i] += window[i] * window[i];
            }
        }

        for (sample, n) in output.iter_mut().zip(norm.iter()) {
            if *n > 1e-6 {
                *sample /= n;
            }
        }

        // Trim the zero-padding tail
        let target = (input.len() as f32 * stretch).round() as usize;
        output.truncate(target.min(output.len()));
        output
    }
}

/// Wrap a phase angle to (-pi, pi]
#[inline]
fn princarg(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

/// Linear-interpolation resampling, reading the input at `ratio`-spaced
/// positions to produce `out_len` samples.
///
/// Positions are tracked in f64; f32 indexing loses the fractional part
/// a few hundred thousand samples in.
fn resample_linear(input: &[f32], ratio: f32, out_len: usize) -> Vec<f32> {
    let step = ratio as f64;
    (0..out_len)
        .map(|i| {
            let pos = i as f64 * step;
            let idx = pos as usize;
            let frac = (pos - idx as f64) as f32;
            let a = input.get(idx).copied().unwrap_or(0.0);
            let b = input.get(idx + 1).copied().unwrap_or(a);
            a + (b - a) * frac
        })
        .collect()
}

impl Effect for PitchShifter {
    fn process(&mut self, samples: &mut Vec<f32>) {
        // Zero shift is an exact identity
        if self.semitones == 0.0 || samples.len() < FFT_SIZE {
            return;
        }

        let ratio = 2.0f32.powf(self.semitones / 12.0);
        let stretched = self.time_stretch(samples, ratio);
        *samples = resample_linear(&stretched, ratio, samples.len());
    }

    fn name(&self) -> &'static str {
        "Pitch Shift"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 44100;

    fn sine(freq: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / SAMPLE_RATE as f32).sin() * 0.5)
            .collect()
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let params = PitchShiftParams {
            enabled: true,
            semitones: 0.0,
        };
        let mut shifter = PitchShifter::new(SAMPLE_RATE, params);

        let input = sine(440.0, 44100);
        let mut samples = input.clone();
        shifter.process(&mut samples);

        assert_eq!(samples, input);
    }

    #[test]
    fn test_semitones_clamped() {
        let params = PitchShiftParams {
            enabled: true,
            semitones: 24.0,
        };
        let shifter = PitchShifter::new(SAMPLE_RATE, params);
        assert_eq!(shifter.semitones(), 12.0);

        let params = PitchShiftParams {
            enabled: true,
            semitones: -24.0,
        };
        let shifter = PitchShifter::new(SAMPLE_RATE, params);
        assert_eq!(shifter.semitones(), -12.0);
    }

    #[test]
    fn test_duration_preserved() {
        let params = PitchShiftParams {
            enabled: true,
            semitones: -3.0,
        };
        let mut shifter = PitchShifter::new(SAMPLE_RATE, params);

        let mut samples = sine(440.0, 44100);
        shifter.process(&mut samples);

        assert_eq!(samples.len(), 44100);
    }

    #[test]
    fn test_shifted_output_is_not_silent() {
        let params = PitchShiftParams {
            enabled: true,
            semitones: 3.0,
        };
        let mut shifter = PitchShifter::new(SAMPLE_RATE, params);

        let mut samples = sine(440.0, 44100);
        shifter.process(&mut samples);

        let rms = (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt();
        assert!(rms > 0.05);
    }

    #[test]
    fn test_short_input_untouched() {
        // Inputs shorter than one FFT frame pass through unchanged
        let params = PitchShiftParams {
            enabled: true,
            semitones: 5.0,
        };
        let mut shifter = PitchShifter::new(SAMPLE_RATE, params);

        let input = sine(440.0, 100);
        let mut samples = input.clone();
        shifter.process(&mut samples);
        assert_eq!(samples, input);
    }

    #[test]
    fn test_resample_position_accurate_deep_into_buffer() {
        // Deep into the output, the read position must keep its
        // fractional part; single-precision positions round it away
        let input: Vec<f32> = sine(2000.0, 400_000);
        let ratio = 1.0f32 / 3.0;
        let out_len = 1_000_000;

        let out = resample_linear(&input, ratio, out_len);

        for i in out_len - 100..out_len {
            let pos = i as f64 * ratio as f64;
            let idx = pos as usize;
            let frac = (pos - idx as f64) as f32;
            let a = input[idx];
            let b = input[idx + 1];
            let expected = a + (b - a) * frac;
            assert!((out[i] - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_princarg_range() {
        for p in [-10.0f32, -PI, 0.0, PI, 10.0, 100.0] {
            let wrapped = princarg(p);
            assert!(wrapped > -PI - 1e-6 && wrapped <= PI + 1e-6);
        }
    }
}
