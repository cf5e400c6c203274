//! Board invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger. Moves keep them by construction and
//! [`GameState::set_state`] rejects boards that would break them, so a
//! violation means a bug in the board code itself.

use crate::game::{Cell, GameState, PLAYERS, QUEEN_ONE, QUEEN_TWO};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let grid = state.grid();

    // Only the two known queens may appear on the board
    for (coord, cell) in grid.iter() {
        if let Cell::Occupied(player) = cell
            && player != QUEEN_ONE
            && player != QUEEN_TWO
        {
            violations.push(InvariantViolation {
                message: format!("Cell {coord} holds unknown player {player}"),
            });
        }
    }

    // One queen cell per moved player, matching the recorded position
    for player in PLAYERS {
        let cells = grid
            .iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count();
        match state.player_position(player) {
            Ok(Some(position)) => {
                if cells != 1 {
                    violations.push(InvariantViolation {
                        message: format!("Player {player} has {cells} queen cells, expected 1"),
                    });
                }
                if grid.get(position) != Some(Cell::Occupied(player)) {
                    violations.push(InvariantViolation {
                        message: format!(
                            "Player {player} is recorded at {position} but the cell is {:?}",
                            grid.get(position)
                        ),
                    });
                }
            }
            Ok(None) => {
                if cells != 0 {
                    violations.push(InvariantViolation {
                        message: format!("Unmoved player {player} has {cells} queen cells"),
                    });
                }
            }
            Err(e) => violations.push(InvariantViolation {
                message: e.to_string(),
            }),
        }
    }

    // Every move leaves a queen or a block behind; craters only add blocks
    let taken = grid.count_blocked() + grid.count_occupied();
    if taken < state.move_count() as usize {
        violations.push(InvariantViolation {
            message: format!(
                "Move count {} exceeds {taken} blocked and occupied cells",
                state.move_count()
            ),
        });
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
