//! Feed sync: newest episode of each feed onto its board card

use crate::config::AppConfig;
use crate::feeds;
use anyhow::{anyhow, bail, Context};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};
use wakecast_board::{card_has_episode, BoardClient};
use wakecast_feed::FeedConfig;

enum Outcome {
    Updated(String),
    UpToDate,
}

/// Sync one feed by id, or every feed when `feed_id` is `None`.
///
/// A failing feed is logged and skipped so the remaining feeds still
/// sync; the run reports failure afterwards.
pub fn run(config: &AppConfig, feed_id: Option<&str>) -> anyhow::Result<()> {
    let selected: Vec<&FeedConfig> = match feed_id {
        Some(id) => vec![feeds::find(id).ok_or_else(|| anyhow!("unknown feed '{id}'"))?],
        None => feeds::FEEDS.iter().collect(),
    };

    let client = BoardClient::new(config.board_api_key.as_str(), config.board_token.as_str());
    let http = reqwest::blocking::Client::new();
    let work_dir = config.work_dir.join("feed_sync");
    fs::create_dir_all(&work_dir)
        .with_context(|| format!("creating work directory {}", work_dir.display()))?;

    let mut failed = Vec::new();
    for feed in selected {
        match sync_feed(&client, &http, config, feed, &work_dir) {
            Ok(Outcome::Updated(title)) => {
                info!(feed = feed.id, %title, "card updated");
            }
            Ok(Outcome::UpToDate) => {
                info!(feed = feed.id, "card already has the latest episode");
            }
            Err(err) => {
                error!(feed = feed.id, error = %err, "sync failed");
                failed.push(feed.id);
            }
        }
    }

    cleanup(&work_dir);

    if !failed.is_empty() {
        bail!("failed to sync: {}", failed.join(", "));
    }
    Ok(())
}

fn sync_feed(
    client: &BoardClient,
    http: &reqwest::blocking::Client,
    config: &AppConfig,
    feed: &FeedConfig,
    work_dir: &Path,
) -> anyhow::Result<Outcome> {
    let board = client.find_board(&config.board_name)?;
    let card = client.find_card(&board.id, feed.card_name)?;

    let episode = wakecast_feed::latest_episode(http, feed.feed_url)?;
    let attachments = client.attachments(&card.id)?;
    if card_has_episode(&card, &attachments, &episode.url) {
        return Ok(Outcome::UpToDate);
    }

    let local = work_dir.join(format!("{}_latest.mp3", feed.file_prefix));
    wakecast_feed::download(http, &episode.url, &local)?;

    for attachment in &attachments {
        if attachment.is_audio() {
            client.delete_attachment(&card.id, &attachment.id)?;
        }
    }

    let now = Local::now();
    client.set_description(
        &card.id,
        &format!(
            "Latest Episode: {}\nPublished: {}\nSource: {}\nLast Updated: {}",
            episode.title,
            episode.published,
            episode.url,
            now.format("%Y-%m-%d %H:%M:%S"),
        ),
    )?;

    let display_name = format!("{}_{}.mp3", feed.file_prefix, now.format("%Y%m%d"));
    client.attach_file(&card.id, &display_name, &local, "audio/mpeg")?;

    Ok(Outcome::Updated(episode.title))
}

/// Best-effort removal of downloaded files; a leftover file only costs
/// disk space until the next run.
fn cleanup(work_dir: &Path) {
    let entries = match fs::read_dir(work_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %work_dir.display(), error = %err, "could not list work directory");
            return;
        }
    };
    for entry in entries.flatten() {
        if let Err(err) = fs::remove_file(entry.path()) {
            warn!(path = %entry.path().display(), error = %err, "could not remove temp file");
        }
    }
    if let Err(err) = fs::remove_dir(work_dir) {
        warn!(dir = %work_dir.display(), error = %err, "could not remove work directory");
    }
}
