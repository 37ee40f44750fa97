//! Flanger - short modulated delay (chorus with a small centre delay)
//!
//! A sine LFO sweeps the read position of a short delay line around a
//! centre delay. With a centre delay of a few milliseconds this reads as
//! a flanger; the feedback path deepens the combing.

use super::Effect;
use std::f32::consts::PI;

/// Flanger parameters
#[derive(Debug, Clone, Copy)]
pub struct FlangerParams {
    pub enabled: bool,
    /// LFO rate in Hz (0.05 - 5.0)
    pub rate_hz: f32,
    /// Modulation depth (0.0 - 1.0)
    pub depth: f32,
    /// Centre delay in ms (0.1 - 10.0); small values flange
    pub centre_delay_ms: f32,
    /// Feedback amount (0.0 - 0.9)
    pub feedback: f32,
    /// Wet/dry mix (0.0 - 1.0)
    pub mix: f32,
}

impl Default for FlangerParams {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_hz: 1.0,
            depth: 0.8,
            centre_delay_ms: 3.0,
            feedback: 0.5,
            mix: 0.2,
        }
    }
}

/// Mono flanger with LFO-modulated delay and feedback
pub struct Flanger {
    sample_rate: f32,
    rate_hz: f32,
    depth: f32,
    centre_delay: f32,
    feedback: f32,
    mix: f32,

    delay_buffer: Vec<f32>,
    write_pos: usize,
    lfo_phase: f32,
    feedback_sample: f32,
}

impl Flanger {
    pub fn new(sample_rate: u32, params: FlangerParams) -> Self {
        let sr = sample_rate as f32;
        let centre_delay_ms = params.centre_delay_ms.clamp(0.1, 10.0);
        let centre_delay = centre_delay_ms / 1000.0 * sr;

        // Room for the full sweep (centre * 2) plus interpolation margin
        let buffer_len = (centre_delay * 2.0) as usize + 4;

        Self {
            sample_rate: sr,
            rate_hz: params.rate_hz.clamp(0.05, 5.0),
            depth: params.depth.clamp(0.0, 1.0),
            centre_delay,
            feedback: params.feedback.clamp(0.0, 0.9),
            mix: params.mix.clamp(0.0, 1.0),
            delay_buffer: vec![0.0; buffer_len],
            write_pos: 0,
            lfo_phase: 0.0,
            feedback_sample: 0.0,
        }
    }

    /// Read from the delay buffer with linear interpolation
    #[inline]
    fn read_delay(&self, delay_samples: f32) -> f32 {
        let len = self.delay_buffer.len();
        let max_delay = len as f32 - 2.0;
        let delay = delay_samples.clamp(1.0, max_delay);

        let read_pos = (self.write_pos as f32 - delay).rem_euclid(len as f32);
        let idx = (read_pos as usize) % len;
        let frac = read_pos.fract();

        let a = self.delay_buffer[idx];
        let b = self.delay_buffer[(idx + 1) % len];
        a * (1.0 - frac) + b * frac
    }

    /// Soft clipper to keep the feedback path from accumulating energy
    #[inline]
    fn soft_clip(x: f32) -> f32 {
        if x > 1.0 {
            1.0 - 1.0 / (1.0 + (x - 1.0) * 2.0)
        } else if x < -1.0 {
            -1.0 + 1.0 / (1.0 + (-x - 1.0) * 2.0)
        } else {
            x
        }
    }
}

impl Effect for Flanger {
    fn process(&mut self, samples: &mut Vec<f32>) {
        let lfo_inc = self.rate_hz / self.sample_rate;

        for sample in samples.iter_mut() {
            let dry = *sample;

            let lfo = (self.lfo_phase * 2.0 * PI).sin();
            self.lfo_phase += lfo_inc;
            if self.lfo_phase >= 1.0 {
                self.lfo_phase -= 1.0;
            }

            // Sweep around the centre delay
            let delay_samples = self.centre_delay * (1.0 + self.depth * lfo);
            let delayed = self.read_delay(delay_samples);

            let write_idx = self.write_pos;
            self.delay_buffer[write_idx] = dry + self.feedback_sample * self.feedback;
            self.write_pos = (self.write_pos + 1) % self.delay_buffer.len();
            self.feedback_sample = delayed;

            *sample = Self::soft_clip(dry * (1.0 - self.mix) + delayed * self.mix);
        }
    }

    fn name(&self) -> &'static str {
        "Flanger"
    }
}
