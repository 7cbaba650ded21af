use std::collections::{BTreeMap, HashMap};

use super::models::{PuzzleEntry, PuzzleOutcome};

/// Starting value for the best-score scan. A real score of 6 ties it and a
/// failed attempt (rank 7) can never reach it, so a puzzle with only
/// failures ends with an empty winner set and the sentinel as `top_score`.
pub const SENTINEL_SCORE: u8 = 6;

/// Determines the winner set for one puzzle's entries.
///
/// Entries are scanned in order: a strictly better score resets the winner
/// set, an equal score joins it.
pub fn puzzle_outcome(entries: &[PuzzleEntry]) -> PuzzleOutcome {
    let mut top_score = SENTINEL_SCORE;
    let mut winners: Vec<String> = Vec::new();

    for entry in entries {
        let value = entry.score.rank();
        if value < top_score {
            winners = vec![entry.player.clone()];
            top_score = value;
        } else if value == top_score {
            winners.push(entry.player.clone());
        }
    }

    PuzzleOutcome { winners, top_score }
}

/// Cumulative points per player: 1 point for every puzzle won, with ties
/// splitting the win (each tied player gets the full point).
pub fn score_leaderboard(results: &BTreeMap<u32, Vec<PuzzleEntry>>) -> HashMap<String, u32> {
    let mut scores: HashMap<String, u32> = HashMap::new();

    for entries in results.values() {
        for winner in puzzle_outcome(entries).winners {
            *scores.entry(winner).or_insert(0) += 1;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::models::Score;

    fn entries(pairs: &[(&str, Score)]) -> Vec<PuzzleEntry> {
        pairs
            .iter()
            .map(|(player, score)| PuzzleEntry {
                player: player.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn tied_minimal_scores_share_the_win() {
        let outcome = puzzle_outcome(&entries(&[
            ("alice", Score::Solved(2)),
            ("bob", Score::Solved(2)),
            ("carol", Score::Solved(4)),
        ]));

        assert_eq!(outcome.winners, vec!["alice", "bob"]);
        assert_eq!(outcome.top_score, 2);
    }

    #[test]
    fn winners_share_the_minimal_score() {
        let pool = entries(&[
            ("alice", Score::Solved(5)),
            ("bob", Score::Solved(3)),
            ("carol", Score::Failed),
            ("dave", Score::Solved(3)),
        ]);

        let outcome = puzzle_outcome(&pool);
        let minimal = pool.iter().map(|e| e.score.rank()).min().unwrap();
        assert_eq!(outcome.top_score, minimal);
        assert_eq!(outcome.winners, vec!["bob", "dave"]);
    }

    #[test]
    fn a_perfect_score_beats_the_sentinel() {
        let outcome = puzzle_outcome(&entries(&[("alice", Score::Solved(1))]));
        assert_eq!(outcome.winners, vec!["alice"]);
        assert_eq!(outcome.top_score, 1);
    }

    #[test]
    fn score_of_six_ties_the_sentinel_and_wins() {
        let outcome = puzzle_outcome(&entries(&[("alice", Score::Solved(6))]));
        assert_eq!(outcome.winners, vec!["alice"]);
        assert_eq!(outcome.top_score, 6);
    }

    #[test]
    fn lone_failure_produces_no_winner() {
        let outcome = puzzle_outcome(&entries(&[("dave", Score::Failed)]));
        assert!(!outcome.has_winner());
        assert_eq!(outcome.top_score, SENTINEL_SCORE);
    }

    #[test]
    fn empty_entries_produce_no_winner() {
        let outcome = puzzle_outcome(&[]);
        assert!(!outcome.has_winner());
        assert_eq!(outcome.top_score, SENTINEL_SCORE);
    }

    #[test]
    fn leaderboard_awards_one_point_per_puzzle_won() {
        let mut results: BTreeMap<u32, Vec<PuzzleEntry>> = BTreeMap::new();
        results.insert(
            1,
            entries(&[("alice", Score::Solved(3)), ("bob", Score::Solved(4))]),
        );
        results.insert(
            2,
            entries(&[("alice", Score::Solved(2)), ("bob", Score::Solved(2))]),
        );
        results.insert(3, entries(&[("bob", Score::Solved(5))]));
        results.insert(4, entries(&[("carol", Score::Failed)]));

        let scores = score_leaderboard(&results);
        assert_eq!(scores["alice"], 2);
        assert_eq!(scores["bob"], 2);
        assert!(!scores.contains_key("carol"));
    }
}
