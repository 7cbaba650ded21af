/// Score indicator from a single result message: attempts used, or a fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Solved in 1..=6 attempts.
    Solved(u8),
    /// Ran out of attempts ("X/6").
    Failed,
}

impl Score {
    /// Numeric value used for winner comparison. A failed attempt ranks
    /// below any real score.
    pub fn rank(&self) -> u8 {
        match self {
            Score::Solved(attempts) => *attempts,
            Score::Failed => 7,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Score::Failed)
    }
}

/// One result extracted from a matching message. Never mutated after
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResult {
    pub puzzle_number: u32,
    pub player: String,
    pub score: Score,
}

/// One player's entry within a single puzzle's result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEntry {
    pub player: String,
    pub score: Score,
}

/// Winner set for one puzzle. `winners` is empty when no entry beat the
/// scoring sentinel (empty result set, or failures only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleOutcome {
    pub winners: Vec<String>,
    pub top_score: u8,
}

impl PuzzleOutcome {
    pub fn has_winner(&self) -> bool {
        !self.winners.is_empty()
    }
}

/// A group of players sharing one leaderboard metric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub value: u32,
    pub players: Vec<String>,
}
