//! Ring modulation - multiply the signal by a sine carrier

use super::Effect;

/// Ring modulator parameters
#[derive(Debug, Clone, Copy)]
pub struct RingModParams {
    pub enabled: bool,
    /// Carrier frequency in Hz
    pub freq_hz: f32,
}

impl Default for RingModParams {
    fn default() -> Self {
        Self {
            enabled: false,
            freq_hz: 400.0,
        }
    }
}

/// Ring modulator - output is input * sin(2*pi*f*t).
///
/// The carrier phase accumulates in f64 and wraps per cycle so it stays
/// accurate over long signals.
pub struct RingModulator {
    phase_inc: f64,
    phase: f64,
}

impl RingModulator {
    pub fn new(sample_rate: u32, params: RingModParams) -> Self {
        Self {
            phase_inc: params.freq_hz.max(0.0) as f64 / sample_rate as f64,
            phase: 0.0,
        }
    }
}

impl Effect for RingModulator {
    fn process(&mut self, samples: &mut Vec<f32>) {
        for sample in samples.iter_mut() {
            *sample *= (self.phase * 2.0 * std::f64::consts::PI).sin() as f32;
            self.phase += self.phase_inc;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }

    fn name(&self) -> &'static str {
        "Ring Mod"
    }
}
