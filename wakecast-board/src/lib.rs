//! Kanban board REST client for wakecast
//!
//! A thin wrapper over the board's HTTP API: find a board and card by
//! name, manage a card's attachments, and update its description. The
//! board is the system of record; nothing is cached locally.

mod client;
mod error;
mod types;

pub use client::BoardClient;
pub use error::BoardError;
pub use types::{card_has_episode, Attachment, Board, Card};
