//! Error types shared by the scraping, download and search components

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for url ({url})")]
    Status {
        status: StatusCode,
        url: String,
    },

    #[error("Not a PDF (content-type: '{content_type}')")]
    NotPdf {
        content_type: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

impl DseError {
    /// True for 404-class answers, which are routine for institutes without a list.
    pub fn is_not_found(&self) -> bool {
        match self {
            DseError::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            DseError::Http(e) => e.status() == Some(StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Message cut down to `max_chars` characters for one-line console reports.
    pub fn short_message(&self, max_chars: usize) -> String {
        let message = self.to_string();
        match message.char_indices().nth(max_chars) {
            Some((idx, _)) => message[..idx].to_string(),
            None => message,
        }
    }
}
