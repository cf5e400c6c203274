//! Output formatting utilities for CLI.

// format! with push_str reads better for report building
#![allow(clippy::format_push_string)]

use isolation::Coord;
use isolation::tournament::{GameResult, SeriesStats, Termination};
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult<'a> {
    /// Seed given to random agents.
    seed: u64,
    /// Rule variant name.
    variant: &'a str,
    /// Winning player (1 or 2).
    winner: u8,
    /// Winning queen's label.
    winner_label: &'a str,
    /// Termination kind.
    termination: Termination,
    /// Human-readable reason.
    reason: &'a str,
    /// Moves applied to the board.
    move_count: u32,
    /// Every ply, in order.
    plies: Vec<JsonPly>,
}

/// JSON-serializable ply.
#[derive(Debug, Serialize)]
pub(super) struct JsonPly {
    /// Player who moved.
    player: u8,
    /// Destination (null if no move was returned).
    to: Option<Coord>,
}

impl<'a> JsonGameResult<'a> {
    /// Create from a `GameResult`.
    pub(super) fn from_game_result(result: &'a GameResult, seed: u64, variant: &'a str) -> Self {
        Self {
            seed,
            variant,
            winner: result.winner,
            winner_label: &result.winner_label,
            termination: result.termination,
            reason: &result.reason,
            move_count: result.move_count,
            plies: result
                .history
                .plies()
                .map(|ply| JsonPly {
                    player: ply.player,
                    to: ply.to,
                })
                .collect(),
        }
    }
}

/// Format a game result as human-readable text.
pub(super) fn format_text(result: &GameResult, seed: u64, board: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {seed})\n"));
    output.push_str(&format!(
        "  Winner: Player {} ({})\n",
        result.winner, result.winner_label
    ));
    output.push_str(&format!("  Reason: {}\n", result.reason));
    output.push_str(&format!(
        "  Moves: {} ({} plies)\n\n",
        result.move_count,
        result.history.ply_count()
    ));
    output.push_str("Final board:\n");
    output.push_str(board);
    output.push('\n');

    output
}

/// JSON-serializable series result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSeriesResult {
    /// Total games played.
    games_played: u64,
    /// Per-entrant statistics.
    entrants: Vec<JsonSeriesEntrant>,
    /// Wins by whoever moved first.
    first_mover_wins: u64,
    /// Games ended by isolation.
    isolations: u64,
    /// Games ended by a timeout.
    timeouts: u64,
    /// Games ended by an illegal move.
    illegal_moves: u64,
    /// Average game length in plies.
    avg_plies: f64,
}

/// JSON-serializable per-entrant series stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonSeriesEntrant {
    /// Entrant index (1-based).
    entrant: usize,
    /// Agent name.
    agent: String,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
}

impl JsonSeriesResult {
    /// Create from stats and agent names.
    pub(super) fn from_stats(stats: &SeriesStats, names: &[String]) -> Self {
        let entrants = names
            .iter()
            .enumerate()
            .map(|(i, name)| JsonSeriesEntrant {
                entrant: i + 1,
                agent: name.clone(),
                wins: stats.wins.get(i).copied().unwrap_or(0),
                win_rate: stats.win_rate(i),
            })
            .collect();

        Self {
            games_played: stats.games_played,
            entrants,
            first_mover_wins: stats.first_mover_wins,
            isolations: stats.isolations,
            timeouts: stats.timeouts,
            illegal_moves: stats.illegal_moves,
            avg_plies: stats.average_plies(),
        }
    }
}

/// Format series stats as human-readable text.
pub(super) fn format_series_text(stats: &SeriesStats, names: &[String]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Series Results ({} games)\n", stats.games_played));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    for (i, name) in names.iter().enumerate() {
        let wins = stats.wins.get(i).copied().unwrap_or(0);
        let rate = stats.win_rate(i) * 100.0;
        output.push_str(&format!("  Entrant {} ({name}): {rate:.1}% ({wins} wins)\n", i + 1));
    }
    output.push_str(&format!("  First mover: {} wins\n\n", stats.first_mover_wins));

    output.push_str("Endings:\n");
    output.push_str(&format!("  Isolated: {}\n", stats.isolations));
    output.push_str(&format!("  Timed out: {}\n", stats.timeouts));
    output.push_str(&format!("  Illegal move: {}\n", stats.illegal_moves));

    output.push_str(&format!(
        "\nAverage Game Length: {:.1} plies\n",
        stats.average_plies()
    ));

    output
}

/// Format series stats as CSV.
pub(super) fn format_series_csv(stats: &SeriesStats, names: &[String]) -> String {
    let mut output = String::new();

    output.push_str("entrant,agent,wins,win_rate\n");
    for (i, name) in names.iter().enumerate() {
        output.push_str(&format!(
            "{},{},{},{:.4}\n",
            i + 1,
            name,
            stats.wins.get(i).copied().unwrap_or(0),
            stats.win_rate(i)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolation::tournament::MoveHistory;

    fn sample() -> GameResult {
        let mut history = MoveHistory::new();
        history.record(1, Some(Coord::new(2, 2)));
        history.record(2, None);
        GameResult {
            winner: 1,
            winner_label: "GreedyAgent - Q1".to_string(),
            loser: 2,
            termination: Termination::IllegalMove,
            reason: "RandomAgent - Q2 made an illegal move.".to_string(),
            history,
            move_count: 1,
        }
    }

    #[test]
    fn test_format_text_mentions_winner_and_reason() {
        let text = format_text(&sample(), 7, "board");
        assert!(text.contains("seed: 7"));
        assert!(text.contains("Winner: Player 1 (GreedyAgent - Q1)"));
        assert!(text.contains("Reason: RandomAgent - Q2 made an illegal move."));
        assert!(text.contains("Moves: 1 (2 plies)"));
    }

    #[test]
    fn test_json_lists_plies() {
        let result = sample();
        let json = serde_json::to_value(JsonGameResult::from_game_result(&result, 7, "classic"))
            .unwrap();
        assert_eq!(json["termination"], "IllegalMove");
        assert_eq!(json["plies"][0]["to"]["col"], 2);
        assert!(json["plies"][1]["to"].is_null());
    }

    #[test]
    fn test_series_csv_rows() {
        let mut stats = SeriesStats::default();
        stats.add_result(&sample(), false);
        let csv = format_series_csv(&stats, &["a".to_string(), "b".to_string()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "entrant,agent,wins,win_rate");
        assert_eq!(lines[1], "1,a,1,1.0000");
        assert_eq!(lines[2], "2,b,0,0.0000");
    }
}
