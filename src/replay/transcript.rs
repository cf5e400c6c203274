//! Plain-text game transcript.

#![allow(clippy::format_push_string)]

use tracing::debug;

use super::ReplayEngine;
use crate::game::GameState;
use crate::tournament::MoveHistory;

/// Replay `history` on a fresh board shaped like `template` and render it.
///
/// Each ply with a move contributes the board before the move followed by
/// `"\n\n<label> moves to (c,r)\r\n"`. Plies without a move are skipped.
/// The transcript ends with `"\n<winner> has won. Reason: <reason>"`.
#[must_use]
pub fn render_transcript(
    winner_label: &str,
    history: &MoveHistory,
    reason: &str,
    template: &GameState,
) -> String {
    debug!(plies = history.ply_count(), "rendering transcript");

    let mut engine = ReplayEngine::new(template, history);
    let mut out = String::new();

    loop {
        // Board as it stood before the ply, only for plies that carry a move
        let before = engine.peek().and_then(|p| p.to).map(|_| engine.state().print_board(&[]));
        let Ok(ply) = engine.step_forward() else {
            break;
        };
        let (Some(board), Some(to)) = (before, ply.to) else {
            continue;
        };
        out.push_str(&board);
        let label = engine.state().label(ply.player).unwrap_or_default();
        out.push_str(&format!("\n\n{label} moves to {to}\r\n"));
    }

    out.push_str(&format!("\n{winner_label} has won. Reason: {reason}"));
    out
}
