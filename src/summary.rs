use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, instrument};

use crate::chat::{fetch_full_history, ChatError, ChatPublisher, HistorySource};
use crate::puzzle;
use crate::report::{render_summary, ChannelStats, PuzzleReport};
use crate::stats::{aggregate, puzzle_outcome, score_leaderboard, top_tiers, Aggregation};

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("Run exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

/// One-shot recap pipeline: drain the channel history, fold it into
/// leaderboards, render the summary and post it back.
///
/// Stateless across runs; the full history is re-fetched and recomputed on
/// every invocation.
pub struct SummaryService {
    source: Arc<dyn HistorySource>,
    publisher: Arc<dyn ChatPublisher>,
    run_deadline: Duration,
}

impl SummaryService {
    pub fn new(
        source: Arc<dyn HistorySource>,
        publisher: Arc<dyn ChatPublisher>,
        run_deadline: Duration,
    ) -> Self {
        Self {
            source,
            publisher,
            run_deadline,
        }
    }

    /// Runs the whole pipeline once and returns the published content.
    ///
    /// The entire run, publish included, is bounded by the configured
    /// deadline; an expiry during history retrieval aborts before anything
    /// is published.
    #[instrument(skip(self))]
    pub async fn run(&self, now: DateTime<Utc>) -> Result<String, SummaryError> {
        tokio::time::timeout(self.run_deadline, self.run_pipeline(now))
            .await
            .map_err(|_| SummaryError::DeadlineExceeded(self.run_deadline))?
    }

    async fn run_pipeline(&self, now: DateTime<Utc>) -> Result<String, SummaryError> {
        let messages = fetch_full_history(self.source.as_ref()).await?;
        info!(messages = messages.len(), "Fetched channel history");

        let aggregation = aggregate(&messages);
        let stats = build_stats(&aggregation, now);
        info!(
            puzzle = stats.reported_puzzle,
            puzzles_completed = stats.total_puzzles,
            attempts = stats.total_attempts,
            "Computed channel stats"
        );

        let content = render_summary(&stats);
        self.publisher.publish(&content).await?;
        info!(puzzle = stats.reported_puzzle, "Published recap");

        Ok(content)
    }
}

/// Folds an aggregation into the render model for the recap of yesterday's
/// puzzle (today's number minus one).
pub fn build_stats(aggregation: &Aggregation, now: DateTime<Utc>) -> ChannelStats {
    let reported_puzzle = puzzle::latest_puzzle_number(now) - 1;

    let yesterday = u32::try_from(reported_puzzle)
        .ok()
        .and_then(|number| aggregation.results.get(&number))
        .map(|entries| PuzzleReport {
            outcome: puzzle_outcome(entries),
            participants: entries.len(),
        });

    let scores = score_leaderboard(&aggregation.results);

    ChannelStats {
        reported_puzzle,
        yesterday,
        total_puzzles: aggregation.results.len(),
        total_attempts: aggregation.total_attempts(),
        score_tiers: top_tiers(&scores, 3),
        participation_tiers: top_tiers(&aggregation.participation, 3),
        failure_tiers: top_tiers(&aggregation.failures, 1),
    }
}
