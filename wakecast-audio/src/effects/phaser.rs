//! Phaser - LFO-swept all-pass filter cascade
//!
//! Four first-order all-pass stages in series, their corner frequency
//! swept by a sine LFO. Mixing the swept signal with the dry input puts
//! moving notches into the spectrum.

use super::Effect;
use std::f32::consts::PI;

/// Lowest corner frequency of the sweep in Hz
const SWEEP_MIN_HZ: f32 = 350.0;

/// Highest corner frequency of the sweep in Hz
const SWEEP_MAX_HZ: f32 = 2200.0;

/// Number of cascaded all-pass stages
const STAGES: usize = 4;

/// Phaser parameters
#[derive(Debug, Clone, Copy)]
pub struct PhaserParams {
    pub enabled: bool,
    /// LFO rate in Hz (0.05 - 5.0)
    pub rate_hz: f32,
    /// Sweep depth (0.0 - 1.0)
    pub depth: f32,
    /// Wet/dry mix (0.0 - 1.0)
    pub mix: f32,
}

impl Default for PhaserParams {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_hz: 1.5,
            depth: 0.7,
            mix: 0.5,
        }
    }
}

/// First-order all-pass stage
#[derive(Default, Clone, Copy)]
struct AllpassStage {
    x1: f32,
    y1: f32,
}

impl AllpassStage {
    #[inline]
    fn process(&mut self, input: f32, coeff: f32) -> f32 {
        let output = coeff * input + self.x1 - coeff * self.y1;
        self.x1 = input;
        self.y1 = output;
        output
    }
}

/// Mono phaser with a swept all-pass cascade
pub struct Phaser {
    sample_rate: f32,
    rate_hz: f32,
    depth: f32,
    mix: f32,

    stages: [AllpassStage; STAGES],
    lfo_phase: f32,
}

impl Phaser {
    pub fn new(sample_rate: u32, params: PhaserParams) -> Self {
        Self {
            sample_rate: sample_rate as f32,
            rate_hz: params.rate_hz.clamp(0.05, 5.0),
            depth: params.depth.clamp(0.0, 1.0),
            mix: params.mix.clamp(0.0, 1.0),
            stages: [AllpassStage::default(); STAGES],
            lfo_phase: 0.0,
        }
    }
}

impl Effect for Phaser {
    fn process(&mut self, samples: &mut Vec<f32>) {
        let lfo_inc = self.rate_hz / self.sample_rate;
        let max_freq = (SWEEP_MAX_HZ).min(self.sample_rate * 0.45);

        for sample in samples.iter_mut() {
            let dry = *sample;

            // LFO mapped to 0..1, scaled by depth
            let lfo = (self.lfo_phase * 2.0 * PI).sin() * 0.5 + 0.5;
            self.lfo_phase += lfo_inc;
            if self.lfo_phase >= 1.0 {
                self.lfo_phase -= 1.0;
            }

            let freq = SWEEP_MIN_HZ + (max_freq - SWEEP_MIN_HZ) * lfo * self.depth;
            let tangent = (PI * freq / self.sample_rate).tan();
            let coeff = (tangent - 1.0) / (tangent + 1.0);

            let mut wet = dry;
            for stage in &mut self.stages {
                wet = stage.process(wet, coeff);
            }

            *sample = dry * (1.0 - self.mix) + wet * self.mix;
        }
    }

    fn name(&self) -> &'static str {
        "Phaser"
    }
}
