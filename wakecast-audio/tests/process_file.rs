//! End-to-end effects pipeline test: sine wave in, processed WAV out.

use std::f32::consts::PI;
use wakecast_audio::{load, process_file, write_wav, EffectsConfig, Waveform};

const SAMPLE_RATE: u32 = 44100;

fn sine_waveform(freq: f32, seconds: f32) -> Waveform {
    let n = (SAMPLE_RATE as f32 * seconds) as usize;
    let samples = (0..n)
        .map(|i| (2.0 * PI * freq * i as f32 / SAMPLE_RATE as f32).sin() * 0.5)
        .collect();
    Waveform::new(samples, SAMPLE_RATE)
}

#[test]
fn default_chain_produces_nonsilent_wav_at_same_rate() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.wav");
    let output_path = dir.path().join("output.wav");

    write_wav(&input_path, &sine_waveform(440.0, 2.0)).unwrap();

    // Stock toggles: flanger and phaser enabled
    process_file(&input_path, &output_path, &EffectsConfig::default()).unwrap();

    assert!(output_path.exists());

    let processed = load(&output_path).unwrap();
    assert_eq!(processed.sample_rate, SAMPLE_RATE);
    assert!(!processed.is_empty());
    assert!(processed.rms() > 0.01, "output should not be silent");
}

#[test]
fn disabled_chain_roundtrips_the_signal() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.wav");
    let output_path = dir.path().join("output.wav");

    let original = sine_waveform(440.0, 1.0);
    write_wav(&input_path, &original).unwrap();

    let config = EffectsConfig {
        flanger: wakecast_audio::FlangerParams {
            enabled: false,
            ..Default::default()
        },
        phaser: wakecast_audio::PhaserParams {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    process_file(&input_path, &output_path, &config).unwrap();

    let processed = load(&output_path).unwrap();
    assert_eq!(processed.sample_rate, original.sample_rate);
    assert_eq!(processed.len(), original.len());

    // 16-bit quantization twice, so allow a small tolerance
    for (a, b) in processed.samples.iter().zip(original.samples.iter()) {
        assert!((a - b).abs() < 1e-3);
    }
}

#[test]
fn missing_input_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let result = process_file(
        &dir.path().join("does_not_exist.mp3"),
        &dir.path().join("out.wav"),
        &EffectsConfig::default(),
    );
    assert!(result.is_err());
}
