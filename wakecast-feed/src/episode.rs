//! Episode and feed configuration types

/// A podcast episode discovered in a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Episode title
    pub title: String,
    /// Audio enclosure URL
    pub url: String,
    /// Publication date as given by the feed
    pub published: String,
    /// Episode summary, if any
    pub description: String,
}

/// Configuration for one synced feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Short identifier used on the command line
    pub id: &'static str,
    /// Feed XML URL
    pub feed_url: &'static str,
    /// Board card the episode is attached to
    pub card_name: &'static str,
    /// Prefix for downloaded and attached file names
    pub file_prefix: &'static str,
}
