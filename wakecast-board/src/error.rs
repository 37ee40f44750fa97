//! Board client errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Board '{0}' not found")]
    BoardNotFound(String),
    #[error("Card '{0}' not found")]
    CardNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
