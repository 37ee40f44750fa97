//! Blocking HTTP client for the board API

use crate::error::BoardError;
use crate::types::{Attachment, Board, Card};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::path::Path;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.trello.com";

/// Client for the board REST API.
///
/// Authentication is an API key plus member token sent as query
/// parameters on every request.
pub struct BoardClient {
    http: Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl BoardClient {
    /// Create a client against the production API
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, token)
    }

    /// Create a client against a specific API host (used by tests)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            token: token.into(),
        }
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("key", self.api_key.as_str()), ("token", self.token.as_str())]
    }

    /// Find a board of the authenticated member by name
    pub fn find_board(&self, name: &str) -> Result<Board, BoardError> {
        let url = format!("{}/1/members/me/boards", self.base_url);
        let boards: Vec<Board> = self
            .http
            .get(&url)
            .query(&self.auth())
            .send()?
            .error_for_status()?
            .json()?;

        boards
            .into_iter()
            .find(|b| b.name == name)
            .ok_or_else(|| BoardError::BoardNotFound(name.to_string()))
    }

    /// Find a card on a board by name, searching every list
    pub fn find_card(&self, board_id: &str, name: &str) -> Result<Card, BoardError> {
        let url = format!("{}/1/boards/{}/cards", self.base_url, board_id);
        let cards: Vec<Card> = self
            .http
            .get(&url)
            .query(&self.auth())
            .send()?
            .error_for_status()?
            .json()?;

        cards
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| BoardError::CardNotFound(name.to_string()))
    }

    /// List a card's attachments
    pub fn attachments(&self, card_id: &str) -> Result<Vec<Attachment>, BoardError> {
        let url = format!("{}/1/cards/{}/attachments", self.base_url, card_id);
        let attachments = self
            .http
            .get(&url)
            .query(&self.auth())
            .send()?
            .error_for_status()?
            .json()?;
        Ok(attachments)
    }

    /// Remove an attachment from a card
    pub fn delete_attachment(&self, card_id: &str, attachment_id: &str) -> Result<(), BoardError> {
        let url = format!(
            "{}/1/cards/{}/attachments/{}",
            self.base_url, card_id, attachment_id
        );
        debug!(card_id, attachment_id, "deleting attachment");
        self.http
            .delete(&url)
            .query(&self.auth())
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Upload a local file as a card attachment
    pub fn attach_file(
        &self,
        card_id: &str,
        display_name: &str,
        path: &Path,
        mime: &str,
    ) -> Result<(), BoardError> {
        let url = format!("{}/1/cards/{}/attachments", self.base_url, card_id);
        debug!(card_id, display_name, path = %path.display(), "uploading attachment");

        let part = Part::file(path)?.mime_str(mime)?;
        let form = Form::new()
            .text("name", display_name.to_string())
            .part("file", part);

        self.http
            .post(&url)
            .query(&self.auth())
            .multipart(form)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Replace a card's description
    pub fn set_description(&self, card_id: &str, desc: &str) -> Result<(), BoardError> {
        let url = format!("{}/1/cards/{}", self.base_url, card_id);
        self.http
            .put(&url)
            .query(&self.auth())
            .query(&[("desc", desc)])
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
