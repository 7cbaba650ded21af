// Library crate for the Wordle channel recap bot
// This file exposes the public API for integration tests

pub mod chat;
pub mod config;
pub mod puzzle;
pub mod report;
pub mod stats;
pub mod summary;

// Re-export commonly used types for easier access in tests
pub use chat::{ChatError, ChatMessage, ChatPublisher, DiscordChatClient, HistorySource};
pub use config::{Config, ConfigError};
pub use stats::{Aggregation, ParsedResult, PuzzleEntry, PuzzleOutcome, Score, Tier};
pub use summary::{SummaryError, SummaryService};
