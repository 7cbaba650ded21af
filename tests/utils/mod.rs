pub mod mocks;

use wordlebot::ChatMessage;

/// Builds a newest-first history from (author, content) pairs, assigning
/// descending zero-padded ids the way the real feed orders them.
pub fn history(messages: &[(&str, &str)]) -> Vec<ChatMessage> {
    messages
        .iter()
        .enumerate()
        .map(|(index, (author, content))| {
            ChatMessage::new(format!("{:06}", messages.len() - index), *author, *content)
        })
        .collect()
}

/// A result message for `puzzle` with the given score token (e.g. "3" or
/// "X"), grid line included.
pub fn result_message(puzzle: u32, score: &str) -> String {
    format!("Wordle {puzzle} {score}/6\n🟩🟩🟩🟩🟩")
}
