//! Game replay.
//!
//! A finished game is fully described by its starting board and its
//! [`MoveHistory`]. Replaying re-applies each recorded ply on a fresh board
//! with the same dimensions, roster and variant rule, without terminal
//! detection.
//!
//! # Time Travel
//!
//! - **Forward**: apply the next recorded ply
//! - **Backward**: re-run from ply 0 to (`cursor` - 1)
//! - **Jump to ply N**: re-run from ply 0 to N

mod transcript;

pub use transcript::render_transcript;

use std::fmt;

use tracing::debug;

use crate::game::GameState;
use crate::tournament::{MoveHistory, Ply};

/// Errors that can occur during replay navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    /// Every recorded ply has been replayed.
    Finished,
    /// Requested ply is outside the recording.
    PlyOutOfBounds {
        /// Requested ply.
        requested: usize,
        /// Number of recorded plies.
        max_ply: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Replay already at the last ply"),
            Self::PlyOutOfBounds { requested, max_ply } => {
                write!(f, "Ply {requested} out of bounds (max: {max_ply})")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

/// Steps through a recorded game one ply at a time.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    /// Empty board the replay starts from.
    origin: GameState,
    /// Board after `cursor` plies.
    state: GameState,
    /// Recorded plies in order.
    plies: Vec<Ply>,
    /// Number of plies replayed so far.
    cursor: usize,
}

impl ReplayEngine {
    /// Start a replay of `history` on an empty board shaped like `template`.
    #[must_use]
    pub fn new(template: &GameState, history: &MoveHistory) -> Self {
        let origin = template.fresh();
        Self {
            state: origin.clone(),
            origin,
            plies: history.plies().copied().collect(),
            cursor: 0,
        }
    }

    /// Board after the plies replayed so far.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of plies replayed so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded plies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Check if every ply has been replayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.plies.len()
    }

    /// The ply the next [`Self::step_forward`] will replay.
    #[must_use]
    pub fn peek(&self) -> Option<&Ply> {
        self.plies.get(self.cursor)
    }

    /// Replay the next ply and return it.
    ///
    /// A ply without a move, or with a move off the board, leaves the board
    /// unchanged but still advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Finished`] once every ply has been replayed.
    pub fn step_forward(&mut self) -> Result<Ply, ReplayError> {
        let ply = *self.plies.get(self.cursor).ok_or(ReplayError::Finished)?;
        self.cursor += 1;

        let Some(to) = ply.to else {
            return Ok(ply);
        };
        if let Err(e) = self.state.replay_move(ply.player, to) {
            debug!(player = ply.player, %e, "recorded move not applied");
        }
        Ok(ply)
    }

    /// Step back one ply by replaying from the start.
    ///
    /// # Errors
    ///
    /// Returns an error if already at ply 0.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.cursor == 0 {
            return Err(ReplayError::PlyOutOfBounds {
                requested: 0,
                max_ply: self.plies.len(),
            });
        }
        self.goto_ply(self.cursor - 1)
    }

    /// Jump to the board after `target` plies.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` exceeds the number of recorded plies.
    pub fn goto_ply(&mut self, target: usize) -> Result<(), ReplayError> {
        if target > self.plies.len() {
            return Err(ReplayError::PlyOutOfBounds {
                requested: target,
                max_ply: self.plies.len(),
            });
        }
        self.state = self.origin.clone();
        self.cursor = 0;
        while self.cursor < target {
            self.step_forward()?;
        }
        Ok(())
    }
}
