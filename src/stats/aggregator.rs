use std::collections::{BTreeMap, HashMap};

use crate::chat::ChatMessage;

use super::models::PuzzleEntry;
use super::parser::parse_result;

/// Everything folded out of one pass over the channel history.
#[derive(Debug, Default, Clone)]
pub struct Aggregation {
    /// Per-puzzle entries in processing order, at most one per player.
    pub results: BTreeMap<u32, Vec<PuzzleEntry>>,
    /// Parseable messages posted per player, duplicates included.
    pub participation: HashMap<String, u32>,
    /// Failed attempts ("X/6") per player.
    pub failures: HashMap<String, u32>,
}

impl Aggregation {
    pub fn total_attempts(&self) -> u32 {
        self.participation.values().sum()
    }
}

/// Folds parsed results out of the raw history.
///
/// The feed delivers messages newest first, so they are processed in
/// reverse. When a player posts more than once for the same puzzle, the most
/// recent post replaces the earlier entry in that puzzle's result set;
/// participation still counts every post.
pub fn aggregate(messages: &[ChatMessage]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for message in messages.iter().rev() {
        let Some(result) = parse_result(message) else {
            continue;
        };

        *aggregation
            .participation
            .entry(result.player.clone())
            .or_insert(0) += 1;

        if result.score.is_failure() {
            *aggregation
                .failures
                .entry(result.player.clone())
                .or_insert(0) += 1;
        }

        let entries = aggregation.results.entry(result.puzzle_number).or_default();
        match entries.iter_mut().find(|entry| entry.player == result.player) {
            Some(existing) => existing.score = result.score,
            None => entries.push(PuzzleEntry {
                player: result.player,
                score: result.score,
            }),
        }
    }

    aggregation
}
