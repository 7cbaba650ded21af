// Public API - what other modules can use
pub use aggregator::{aggregate, Aggregation};
pub use models::{ParsedResult, PuzzleEntry, PuzzleOutcome, Score, Tier};
pub use parser::parse_result;
pub use ranker::top_tiers;
pub use scorer::{puzzle_outcome, score_leaderboard, SENTINEL_SCORE};

// Internal modules
mod aggregator;
pub mod models;
mod parser;
mod ranker;
mod scorer;
