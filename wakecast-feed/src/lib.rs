//! RSS feed polling for wakecast
//!
//! Fetches podcast feeds, extracts the newest audio episode, and
//! downloads enclosures to local files.

mod episode;
mod fetch;

pub use episode::{Episode, FeedConfig};
pub use fetch::{download, extract_latest_episode, latest_episode, FeedError};
