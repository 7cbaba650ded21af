use crate::chat::ChatMessage;

use super::models::{ParsedResult, Score};

/// Extracts a result from a message whose content starts with
/// `"Wordle <number> <score>/6"`. The score indicator is the first
/// character of the third token: `1`-`6`, or `X` for a fail.
///
/// Anything that does not match structurally yields `None` and is skipped
/// by the aggregation; a malformed puzzle number rejects the message rather
/// than producing a bogus entry.
pub fn parse_result(message: &ChatMessage) -> Option<ParsedResult> {
    if !message.content.starts_with("Wordle ") {
        return None;
    }

    let first_line = message.content.lines().next()?;
    let mut tokens = first_line.split_whitespace();
    tokens.next()?; // "Wordle"

    let puzzle_number: u32 = tokens.next()?.parse().ok()?;
    let score = match tokens.next()?.chars().next()? {
        'X' => Score::Failed,
        digit @ '1'..='6' => Score::Solved(digit as u8 - b'0'),
        _ => return None,
    };

    Some(ParsedResult {
        puzzle_number,
        player: message.author.username.clone(),
        score,
    })
}
