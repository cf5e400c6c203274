// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Isolation: a rules engine for the two-queen isolation game.
//!
//! This crate provides:
//! - Board state with forecast-by-clone for search agents
//! - The classic rule and the impact-crater variant
//! - A turn driver with advisory per-move time limits and forfeits
//! - Replay and plain-text transcripts of finished games
//! - Parallel series of games between reference agents
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Turn Driver / Series Runner       │
//! ├─────────────────────────────────────┤
//! │   Agents (select_move on a copy)    │
//! ├─────────────────────────────────────┤
//! │   Game State, Move Generation       │
//! └─────────────────────────────────────┘
//! ```

pub mod agent;
pub mod error;
pub mod game;
pub mod replay;
pub mod timer;
pub mod tournament;

pub use error::{BoardError, BoardResult};

// Re-export key game types at crate root for convenience
pub use agent::{Agent, GreedyAgent, RandomAgent};
pub use game::{Cell, Coord, GameState, Grid, MoveOutcome, PlayerId, QUEEN_ONE, QUEEN_TWO, Variant};
pub use timer::TimeLeft;
pub use tournament::{Game, GameResult, MatchConfig, Termination, run_game};
