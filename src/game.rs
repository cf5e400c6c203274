//! Board layer.
//!
//! Implements the rules of isolation:
//! - Grid of blank, blocked and occupied cells
//! - Queen move generation (placement, then eight sliding rays)
//! - Move application with a pluggable variant hook (impact craters)
//! - Cloneable state for forecasting
//! - Invariant checks and ASCII printing

mod grid;
mod invariants;
pub mod movegen;
mod player;
mod render;
mod state;
mod variant;

pub use grid::{Cell, Coord, Grid};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use player::{PLAYERS, PlayerId, QUEEN_ONE, QUEEN_TWO, Roster, opponent, queen_symbol, slot};
pub use render::render_board;
pub use state::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GameState, MoveOutcome};
pub use variant::{Classic, ImpactCrater, MoveVariant, Variant};
