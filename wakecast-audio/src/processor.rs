//! File-in, file-out effects pipeline

use crate::effects::{build_chain, EffectsConfig};
use crate::loader::{load, LoadError};
use crate::writer::{write_wav, WriteError};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from the file-level pipeline
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Decode `input`, run the enabled effects in chain order, and write the
/// result to `output` as 16-bit mono WAV.
///
/// The output keeps the input's sample rate and channel count (mono).
pub fn process_file(
    input: &Path,
    output: &Path,
    config: &EffectsConfig,
) -> Result<(), ProcessError> {
    let mut waveform = load(input)?;
    info!(
        samples = waveform.len(),
        sample_rate = waveform.sample_rate,
        input = %input.display(),
        "loaded audio"
    );

    let mut chain = build_chain(config, waveform.sample_rate);
    for effect in &mut chain {
        info!(effect = effect.name(), "applying effect");
        effect.process(&mut waveform.samples);
    }

    write_wav(output, &waveform)?;
    info!(output = %output.display(), "wrote processed audio");

    Ok(())
}
