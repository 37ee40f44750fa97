//! WAV output using hound

use crate::waveform::Waveform;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing a WAV file
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV encode error: {0}")]
    Encode(String),
}

/// Write a mono waveform to a 16-bit PCM WAV file.
///
/// The file carries the waveform's own sample rate.
pub fn write_wav(path: &Path, waveform: &Waveform) -> Result<(), WriteError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| WriteError::Encode(e.to_string()))?;

    for &sample in &waveform.samples {
        writer
            .write_sample(float_to_i16(sample))
            .map_err(|e| WriteError::Encode(e.to_string()))?;
    }

    writer
        .finalize()
        .map_err(|e| WriteError::Encode(e.to_string()))?;

    Ok(())
}

/// Convert float sample to 16-bit integer with clipping
#[inline]
fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 32767.0) as i16
}
