use crate::stats::{PuzzleOutcome, Tier};

/// Everything the summary message needs, computed once per run.
#[derive(Debug, Clone)]
pub struct ChannelStats {
    /// Yesterday's puzzle number, the one the recap reports on.
    pub reported_puzzle: i64,
    /// `None` when nobody has posted a result for that puzzle yet.
    pub yesterday: Option<PuzzleReport>,
    pub total_puzzles: usize,
    pub total_attempts: u32,
    pub score_tiers: Vec<Tier>,
    pub participation_tiers: Vec<Tier>,
    pub failure_tiers: Vec<Tier>,
}

#[derive(Debug, Clone)]
pub struct PuzzleReport {
    pub outcome: PuzzleOutcome,
    pub participants: usize,
}

const MEDALS: [&str; 3] = ["🥇 1st", "🥈 2nd", "🥉 3rd"];

/// Renders the recap message. Missing tiers and a missing yesterday result
/// set are rendered as shorter sections, never an error.
pub fn render_summary(stats: &ChannelStats) -> String {
    let mut out = String::new();

    out.push_str("A new Wordle is out! https://www.powerlanguage.co.uk/wordle/\n\n");
    out.push_str("📊 Stats:\n\n");
    out.push_str(&format!("  **Wordle {}**\n\n", stats.reported_puzzle));

    match &stats.yesterday {
        Some(report) if report.outcome.has_winner() => {
            out.push_str(&format!(
                "  Winner: **{}** with a score of **{}**\n",
                report.outcome.winners.join(", "),
                report.outcome.top_score,
            ));
            out.push_str(&format!(
                "  Participants: **{} people**\n",
                report.participants
            ));
        }
        Some(report) => {
            out.push_str("  Winner: nobody solved it 😬\n");
            out.push_str(&format!(
                "  Participants: **{} people**\n",
                report.participants
            ));
        }
        None => {
            out.push_str("  No results yet for this puzzle.\n");
        }
    }

    out.push_str(&format!(
        "\n  Total Wordles completed: **{}**\n  Total attempts: **{}**\n",
        stats.total_puzzles, stats.total_attempts,
    ));

    out.push_str("\n🏆 Leaderboards:\n");
    out.push_str("\n  Winners:\n\n");
    push_tiers(&mut out, &stats.score_tiers, "pts");
    out.push_str("\n  Participants:\n\n");
    push_tiers(&mut out, &stats.participation_tiers, " puzzles");

    if let Some(top_failures) = stats.failure_tiers.first() {
        out.push_str("\n  The award for most incorrect answers:\n\n");
        out.push_str(&format!(
            "    💩 {} incorrect answer(s) - **{}**\n",
            top_failures.value,
            top_failures.players.join(", "),
        ));
    }

    out
}

fn push_tiers(out: &mut String, tiers: &[Tier], unit: &str) {
    if tiers.is_empty() {
        out.push_str("    (no entries yet)\n");
        return;
    }

    for (medal, tier) in MEDALS.iter().zip(tiers) {
        out.push_str(&format!(
            "    {medal}: {}{unit} - **{}**\n",
            tier.value,
            tier.players.join(", "),
        ));
    }
}
