//! Audio pipeline for wakecast - decoding, effects, and WAV output
//!
//! This crate implements the offline audio path:
//! - Loader: decode any supported container to a mono waveform
//! - Effects: fixed-order chain of togglable effects
//! - Writer: 16-bit PCM WAV encoding
//! - Processor: file-in, file-out pipeline tying the three together

pub mod effects;
mod loader;
mod processor;
mod waveform;
mod writer;

pub use effects::{
    BandpassParams, Effect, EffectsConfig, FlangerParams, PhaserParams, PitchShiftParams,
    RingModParams,
};
pub use loader::{load, LoadError};
pub use processor::{process_file, ProcessError};
pub use waveform::Waveform;
pub use writer::{write_wav, WriteError};
