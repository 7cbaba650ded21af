// Public API - what other modules can use
pub use client::DiscordChatClient;
pub use errors::ChatError;
pub use history::{fetch_full_history, ChatPublisher, HistorySource, PAGE_SIZE};
pub use models::{ChatMessage, MessageAuthor};

// Internal modules
mod client;
mod errors;
mod history;
pub mod models;
