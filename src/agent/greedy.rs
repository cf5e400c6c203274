//! One-ply mobility agent.

use crate::agent::Agent;
use crate::game::{Coord, GameState, movegen};
use crate::timer::TimeLeft;

/// Milliseconds kept in hand before the deadline.
const DEFAULT_RESERVE_MS: i64 = 10;

/// Agent that forecasts each legal move and keeps the one leaving the best
/// mobility difference (own moves minus `aggression` times opponent moves).
///
/// A move that isolates the opponent is taken immediately.
#[derive(Debug, Clone, Copy)]
pub struct GreedyAgent {
    aggression: i64,
    reserve_ms: i64,
}

impl GreedyAgent {
    /// Create an agent weighting opponent mobility by `aggression`.
    #[must_use]
    pub const fn new(aggression: i64) -> Self {
        Self {
            aggression,
            reserve_ms: DEFAULT_RESERVE_MS,
        }
    }

    /// Score a forecast position from the mover's point of view.
    fn score(&self, next: &GameState) -> i64 {
        // After the forecast the mover is the inactive player
        let own = movegen::count_legal_moves(next.grid(), next.inactive_position());
        let theirs = movegen::count_legal_moves(next.grid(), next.active_position());
        let own = i64::try_from(own).unwrap_or(i64::MAX);
        let theirs = i64::try_from(theirs).unwrap_or(i64::MAX);
        own.saturating_sub(self.aggression.saturating_mul(theirs))
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> String {
        "GreedyAgent".to_string()
    }

    fn select_move(&mut self, board: GameState, time_left: &TimeLeft<'_>) -> Option<Coord> {
        let mut best: Option<(i64, Coord)> = None;

        for mv in board.active_moves() {
            if best.is_some() && time_left.millis() <= self.reserve_ms {
                break;
            }
            let Ok((next, outcome)) = board.forecast_move(mv) else {
                continue;
            };
            if outcome.is_over() {
                return Some(mv);
            }
            let score = self.score(&next);
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Grid, Roster, Variant};
    use crate::timer::WallClock;

    #[test]
    fn test_takes_isolating_move() {
        use Cell::{Blank as B, Blocked as X, Occupied as Q};
        let mut state = GameState::new(3, 3, Roster::default(), Variant::Classic).unwrap();
        let grid = Grid::from_rows(&[
            vec![Q(2), X, B],
            vec![B, X, B],
            vec![Q(1), X, B],
        ])
        .unwrap();
        state.set_state(grid, true).unwrap();

        let clock = WallClock::new();
        let time_left = TimeLeft::start(&clock, 0);
        let mv = GreedyAgent::default().select_move(state, &time_left);
        assert_eq!(mv, Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_prefers_open_centre_for_placement() {
        let state = GameState::new(5, 5, Roster::default(), Variant::ImpactCrater).unwrap();
        let clock = WallClock::new();
        let time_left = TimeLeft::start(&clock, 0);
        let mv = GreedyAgent::default().select_move(state, &time_left);
        // Placing in the centre leaves 16 moves; a corner only 12
        assert_eq!(mv, Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut state = GameState::new(1, 1, Roster::default(), Variant::Classic).unwrap();
        state.apply_move(Coord::new(0, 0)).unwrap();
        let clock = WallClock::new();
        let time_left = TimeLeft::start(&clock, 0);
        assert_eq!(GreedyAgent::default().select_move(state, &time_left), None);
    }
}
