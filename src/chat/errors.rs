use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("History fetch failed after {pages} page(s): {reason}")]
    HistoryFetch { pages: usize, reason: String },

    #[error("Publish failed: {0}")]
    Publish(String),
}
