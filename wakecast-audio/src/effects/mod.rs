//! Offline audio effects for wakecast
//!
//! Each effect transforms a mono sample buffer in place. The chain order
//! is fixed (pitch shift, ring mod, bandpass, flanger, phaser); which
//! effects actually run is controlled by [`EffectsConfig`].

mod bandpass;
mod flanger;
mod phaser;
mod pitch_shift;
mod ring_mod;

pub use bandpass::{Bandpass, BandpassParams};
pub use flanger::{Flanger, FlangerParams};
pub use phaser::{Phaser, PhaserParams};
pub use pitch_shift::{PitchShiftParams, PitchShifter};
pub use ring_mod::{RingModParams, RingModulator};

/// Trait for offline audio effects
pub trait Effect {
    /// Process mono samples in place. Effects may grow the buffer but
    /// never shrink it.
    fn process(&mut self, samples: &mut Vec<f32>);

    /// Get effect name
    fn name(&self) -> &'static str;
}

/// Parameters for the whole effects chain.
///
/// Defaults reproduce the pipeline's stock sound: flanger and phaser on,
/// everything else off.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectsConfig {
    pub pitch_shift: PitchShiftParams,
    pub ring_mod: RingModParams,
    pub bandpass: BandpassParams,
    pub flanger: FlangerParams,
    pub phaser: PhaserParams,
}

/// Build the enabled effects, in chain order, for the given sample rate
pub fn build_chain(config: &EffectsConfig, sample_rate: u32) -> Vec<Box<dyn Effect>> {
    let mut chain: Vec<Box<dyn Effect>> = Vec::new();

    if config.pitch_shift.enabled {
        chain.push(Box::new(PitchShifter::new(sample_rate, config.pitch_shift)));
    }
    if config.ring_mod.enabled {
        chain.push(Box::new(RingModulator::new(sample_rate, config.ring_mod)));
    }
    if config.bandpass.enabled {
        chain.push(Box::new(Bandpass::new(sample_rate, config.bandpass)));
    }
    if config.flanger.enabled {
        chain.push(Box::new(Flanger::new(sample_rate, config.flanger)));
    }
    if config.phaser.enabled {
        chain.push(Box::new(Phaser::new(sample_rate, config.phaser)));
    }

    chain
}
