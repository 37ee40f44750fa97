//! The built-in feed table

use wakecast_feed::FeedConfig;

/// Every feed the sync knows about, keyed by a short id usable on the
/// command line.
pub const FEEDS: &[FeedConfig] = &[
    FeedConfig {
        id: "cpr",
        feed_url: "https://pod.cpr.org/cm/",
        card_name: "Colorado Matters",
        file_prefix: "cpr",
    },
    FeedConfig {
        id: "npr",
        feed_url: "https://feeds.npr.org/510019/podcast.xml",
        card_name: "NPR New Music Friday",
        file_prefix: "npr",
    },
    FeedConfig {
        id: "oddlots",
        feed_url: "https://www.omnycontent.com/d/playlist/e73c998e-6e60-432f-8610-ae210140c5b1/8a94442e-5a74-4fa2-8b8d-ae27003a8d6b/982f5071-765c-403d-969d-ae27003a8d83/podcast.rss",
        card_name: "Odd Lots",
        file_prefix: "oddlots",
    },
    FeedConfig {
        id: "radio_atlantic",
        feed_url: "https://feeds.megaphone.fm/ATL8165151910",
        card_name: "Radio Atlantic",
        file_prefix: "radio_atlantic",
    },
    FeedConfig {
        id: "80k_hours",
        feed_url: "https://feeds.transistor.fm/80000-hours-podcast",
        card_name: "80k Hours",
        file_prefix: "80k_hours",
    },
    FeedConfig {
        id: "ft_rachman_review",
        feed_url: "https://feeds.acast.com/public/shows/7144a390-7a86-440e-9b2e-db712c18368c",
        card_name: "FT Rachman Review",
        file_prefix: "ft_rachman_review",
    },
    FeedConfig {
        id: "ft_news_briefing",
        feed_url: "https://feeds.acast.com/public/shows/73fe3ede-5c5c-4850-96a8-30db8dbae8bf",
        card_name: "FT News Briefing",
        file_prefix: "ft_news_briefing",
    },
];

/// Look a feed up by its command-line id
pub fn find(id: &str) -> Option<&'static FeedConfig> {
    FEEDS.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_ids_are_unique() {
        let mut ids: Vec<_> = FEEDS.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEEDS.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("oddlots").unwrap().card_name, "Odd Lots");
        assert!(find("nope").is_none());
    }
}
