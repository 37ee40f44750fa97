//! Daily intro: greeting text, TTS, effects, board attachment

use crate::config::AppConfig;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::fs;
use tracing::info;
use wakecast_audio::EffectsConfig;
use wakecast_board::BoardClient;
use wakecast_tts::TtsClient;

fn greeting(name: &str, date: NaiveDate) -> String {
    format!(
        "Good morning, {name}! Today is {}",
        date.format("%A, %B %d, %Y")
    )
}

/// Synthesize today's greeting, run it through the effects chain, and
/// attach the result to the intro card.
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let work_dir = config.work_dir.join("daily_intro");
    fs::create_dir_all(&work_dir)
        .with_context(|| format!("creating work directory {}", work_dir.display()))?;

    let now = Local::now();
    let text = greeting(&config.intro_greeting_name, now.date_naive());
    info!(%text, "generating daily intro");

    let mp3_path = work_dir.join("intro.mp3");
    let wav_path = work_dir.join("intro.wav");

    let tts = TtsClient::new(config.tts_api_key.as_str(), config.tts_voice_id.as_str());
    tts.synthesize_to_file(&text, &mp3_path)?;

    wakecast_audio::process_file(&mp3_path, &wav_path, &EffectsConfig::default())?;

    let client = BoardClient::new(config.board_api_key.as_str(), config.board_token.as_str());
    let board = client.find_board(&config.board_name)?;
    let card = client.find_card(&board.id, &config.intro_card_name)?;

    for attachment in client.attachments(&card.id)? {
        if attachment.is_audio() {
            client.delete_attachment(&card.id, &attachment.id)?;
        }
    }

    let display_name = format!("intro_{}.wav", now.format("%Y%m%d"));
    client.set_description(
        &card.id,
        &format!(
            "Daily Intro\nUpdated on: {}\nFile: {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            display_name,
        ),
    )?;
    client.attach_file(&card.id, &display_name, &wav_path, "audio/wav")?;

    info!(card = %card.name, "daily intro attached");
    Ok(())
}
