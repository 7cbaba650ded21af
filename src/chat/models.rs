use serde::{Deserialize, Serialize};

/// Author block on a channel message. Only the username is used.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageAuthor {
    pub username: String,
}

/// One message from the channel history feed. Immutable once fetched; the id
/// is an opaque, monotonically increasing string used as the pagination
/// cursor.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: MessageAuthor,
    pub content: String,
}

impl ChatMessage {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: MessageAuthor {
                username: username.into(),
            },
            content: content.into(),
        }
    }
}

/// Request body for posting a message back to the channel.
#[derive(Debug, Serialize)]
pub struct PublishRequest<'a> {
    pub content: &'a str,
    pub tts: bool,
}
