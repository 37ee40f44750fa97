//! Board API types

use serde::Deserialize;

/// A board owned by the authenticated member
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// A card on a board
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

/// A file or URL attached to a card
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Attachment {
    /// True for attachments the sync considers audio it owns
    pub fn is_audio(&self) -> bool {
        self.name.ends_with(".mp3") || self.name.ends_with(".wav")
    }
}

/// Idempotence check for feed sync: does the card already carry this
/// episode?
///
/// Uploaded files get rewritten URLs on the board, so the attachment URL
/// alone cannot identify the episode. The sync records the source URL in
/// the card description; either signal counts as a match.
pub fn card_has_episode(card: &Card, attachments: &[Attachment], episode_url: &str) -> bool {
    if attachments.iter().any(|a| a.url == episode_url) {
        return true;
    }
    card.desc.contains(episode_url)
}
