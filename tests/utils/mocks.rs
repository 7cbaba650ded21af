use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wordlebot::{ChatError, ChatMessage, ChatPublisher, HistorySource};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Serves a fixed newest-first history in pages of `wordlebot::chat::PAGE_SIZE`,
/// honoring the `before` cursor the way the real feed does.
pub struct MockHistoryFeed {
    messages: Vec<ChatMessage>,
    pages_served: AtomicUsize,
}

impl MockHistoryFeed {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            pages_served: AtomicUsize::new(0),
        }
    }

    pub fn pages_served(&self) -> usize {
        self.pages_served.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistorySource for MockHistoryFeed {
    async fn fetch_page(&self, before: Option<&str>) -> Result<Vec<ChatMessage>, ChatError> {
        self.pages_served.fetch_add(1, Ordering::SeqCst);

        let start = match before {
            None => 0,
            Some(id) => {
                // Strictly older than the cursor id.
                self.messages
                    .iter()
                    .position(|m| m.id == id)
                    .map(|index| index + 1)
                    .unwrap_or(self.messages.len())
            }
        };
        let end = (start + wordlebot::chat::PAGE_SIZE).min(self.messages.len());
        Ok(self.messages[start..end].to_vec())
    }
}

/// Records everything published, or fails every call when poisoned.
#[derive(Clone, Default)]
pub struct MockPublisher {
    published: Arc<RwLock<Vec<String>>>,
    fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            published: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    pub async fn published(&self) -> Vec<String> {
        self.published.read().await.clone()
    }
}

#[async_trait]
impl ChatPublisher for MockPublisher {
    async fn publish(&self, content: &str) -> Result<(), ChatError> {
        if self.fail {
            return Err(ChatError::Publish("channel rejected the message".to_string()));
        }
        self.published.write().await.push(content.to_string());
        Ok(())
    }
}
