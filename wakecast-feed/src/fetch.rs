//! Feed fetching, parsing, and enclosure download

use crate::episode::Episode;
use reqwest::blocking::Client;
use rss::Channel;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// MIME types accepted as podcast audio
const AUDIO_MIME_TYPES: [&str; 2] = ["audio/mpeg", "audio/mp3"];

/// Errors that can occur while polling a feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Feed parse error: {0}")]
    Parse(#[from] rss::Error),
    #[error("No audio enclosure found in feed")]
    NoAudioEnclosure,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch a feed and return its newest episode with an audio enclosure
pub fn latest_episode(client: &Client, feed_url: &str) -> Result<Episode, FeedError> {
    debug!(feed_url, "fetching feed");
    let bytes = client.get(feed_url).send()?.error_for_status()?.bytes()?;
    let channel = Channel::read_from(&bytes[..])?;
    extract_latest_episode(&channel)
}

/// Walk feed items in order and return the first with an audio enclosure.
///
/// Feeds list newest entries first, so this is the latest episode.
pub fn extract_latest_episode(channel: &Channel) -> Result<Episode, FeedError> {
    for item in channel.items() {
        let Some(enclosure) = item.enclosure() else {
            continue;
        };
        if !AUDIO_MIME_TYPES.contains(&enclosure.mime_type()) {
            continue;
        }

        return Ok(Episode {
            title: item.title().unwrap_or("Untitled episode").to_string(),
            url: enclosure.url().to_string(),
            published: item.pub_date().unwrap_or("Unknown date").to_string(),
            description: item.description().unwrap_or_default().to_string(),
        });
    }

    Err(FeedError::NoAudioEnclosure)
}

/// Download an enclosure URL to a local file
pub fn download(client: &Client, url: &str, dest: &Path) -> Result<(), FeedError> {
    debug!(url, dest = %dest.display(), "downloading enclosure");
    let mut response = client.get(url).send()?.error_for_status()?;
    let mut file = File::create(dest)?;
    response.copy_to(&mut file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_xml(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <link>https://example.com</link>
    <description>A test feed</description>
    {items}
  </channel>
</rss>"#
        )
    }

    #[test]
    fn test_extracts_first_audio_enclosure() {
        let xml = feed_xml(
            r#"
    <item>
      <title>Show notes only</title>
      <description>No audio here</description>
    </item>
    <item>
      <title>Episode 42</title>
      <description>The answer</description>
      <pubDate>Fri, 21 Mar 2025 10:00:00 GMT</pubDate>
      <enclosure url="https://example.com/ep42.mp3" length="1000" type="audio/mpeg"/>
    </item>
    <item>
      <title>Episode 41</title>
      <enclosure url="https://example.com/ep41.mp3" length="1000" type="audio/mpeg"/>
    </item>"#,
        );

        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let episode = extract_latest_episode(&channel).unwrap();

        assert_eq!(episode.title, "Episode 42");
        assert_eq!(episode.url, "https://example.com/ep42.mp3");
        assert_eq!(episode.published, "Fri, 21 Mar 2025 10:00:00 GMT");
        assert_eq!(episode.description, "The answer");
    }

    #[test]
    fn test_skips_non_audio_enclosures() {
        let xml = feed_xml(
            r#"
    <item>
      <title>Video episode</title>
      <enclosure url="https://example.com/ep.mp4" length="1000" type="video/mp4"/>
    </item>
    <item>
      <title>Audio episode</title>
      <enclosure url="https://example.com/ep.mp3" length="1000" type="audio/mp3"/>
    </item>"#,
        );

        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let episode = extract_latest_episode(&channel).unwrap();
        assert_eq!(episode.title, "Audio episode");
    }

    #[test]
    fn test_no_audio_enclosure_is_an_error() {
        let xml = feed_xml(
            r#"
    <item>
      <title>Nothing attached</title>
    </item>"#,
        );

        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let err = extract_latest_episode(&channel).unwrap_err();
        assert!(matches!(err, FeedError::NoAudioEnclosure));
    }
}
