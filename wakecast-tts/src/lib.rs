//! Text-to-speech client for wakecast
//!
//! Synthesizes short spoken phrases through a hosted TTS API and writes
//! the returned MP3 bytes to disk. One request per phrase; there is no
//! streaming.

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const MODEL_ID: &str = "eleven_multilingual_v2";

/// Default voice used when none is configured
pub const DEFAULT_VOICE_ID: &str = "15ykVVhNtZjeRtlW8QZC";

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TTS API returned status {status}")]
    Api { status: u16 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Delivery controls sent with every synthesis request.
///
/// Tuned for a clear, slightly expressive morning announcement.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.4,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// Blocking client for the TTS API
pub struct TtsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    settings: VoiceSettings,
}

impl TtsClient {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, voice_id)
    }

    /// Client against a specific API host (used by tests)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            settings: VoiceSettings::default(),
        }
    }

    /// Synthesize a phrase, returning encoded MP3 bytes
    pub fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);
        debug!(chars = text.len(), "requesting speech synthesis");

        let body = SynthesisRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: self.settings,
        };

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("accept", "audio/mpeg")
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Synthesize a phrase and write the MP3 to `dest`
    pub fn synthesize_to_file(&self, text: &str, dest: &Path) -> Result<(), TtsError> {
        let audio = self.synthesize(text)?;
        fs::write(dest, &audio)?;
        debug!(path = %dest.display(), bytes = audio.len(), "wrote synthesized speech");
        Ok(())
    }
}
