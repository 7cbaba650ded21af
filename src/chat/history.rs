use async_trait::async_trait;
use tracing::debug;

use super::{errors::ChatError, models::ChatMessage};

/// Fixed page size for history retrieval. A page shorter than this signals
/// the end of the history.
pub const PAGE_SIZE: usize = 100;

/// One page of channel history, newest message first.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetches up to [`PAGE_SIZE`] messages strictly older than `before`,
    /// or the newest page when `before` is `None`.
    async fn fetch_page(&self, before: Option<&str>) -> Result<Vec<ChatMessage>, ChatError>;
}

#[async_trait]
pub trait ChatPublisher: Send + Sync {
    async fn publish(&self, content: &str) -> Result<(), ChatError>;
}

/// Drains the whole channel history, newest message first.
///
/// Each page's cursor is the id of the oldest message on the previous page,
/// so pages are fetched strictly sequentially.
pub async fn fetch_full_history(source: &dyn HistorySource) -> Result<Vec<ChatMessage>, ChatError> {
    let mut messages = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source
            .fetch_page(cursor.as_deref())
            .await
            .map_err(|err| ChatError::HistoryFetch {
                pages,
                reason: err.to_string(),
            })?;
        pages += 1;

        let page_len = page.len();
        cursor = page.last().map(|message| message.id.clone());
        messages.extend(page);

        if page_len < PAGE_SIZE {
            break;
        }
    }

    debug!(pages, total = messages.len(), "Fetched full channel history");
    Ok(messages)
}
