//! Player identities and display labels.

use crate::error::{BoardError, BoardResult};

/// Identifier for a queen: `1` or `2`.
pub type PlayerId = u8;

/// The queen that moves first in a fresh game.
pub const QUEEN_ONE: PlayerId = 1;

/// The queen that moves second in a fresh game.
pub const QUEEN_TWO: PlayerId = 2;

/// Both player ids in seat order.
pub const PLAYERS: [PlayerId; 2] = [QUEEN_ONE, QUEEN_TWO];

/// Map a player id to its array slot.
///
/// # Errors
///
/// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
#[inline]
pub fn slot(player: PlayerId) -> BoardResult<usize> {
    match player {
        QUEEN_ONE => Ok(0),
        QUEEN_TWO => Ok(1),
        other => Err(BoardError::UnknownPlayer(other)),
    }
}

/// The other player.
///
/// # Errors
///
/// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
#[inline]
pub fn opponent(player: PlayerId) -> BoardResult<PlayerId> {
    match player {
        QUEEN_ONE => Ok(QUEEN_TWO),
        QUEEN_TWO => Ok(QUEEN_ONE),
        other => Err(BoardError::UnknownPlayer(other)),
    }
}

/// Two-character board glyph for a queen.
#[must_use]
pub fn queen_symbol(player: PlayerId) -> String {
    format!("Q{player}")
}

/// Display labels for the two queens.
///
/// A label is the agent name plus the queen symbol, e.g. `"GreedyAgent - Q1"`.
/// Labels are for rendering only; identity is always the [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    labels: [String; 2],
}

impl Roster {
    /// Build labels from the names of the first and second agents.
    #[must_use]
    pub fn new(first_name: &str, second_name: &str) -> Self {
        Self {
            labels: [
                format!("{first_name} - {}", queen_symbol(QUEEN_ONE)),
                format!("{second_name} - {}", queen_symbol(QUEEN_TWO)),
            ],
        }
    }

    /// Label for a player.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn label(&self, player: PlayerId) -> BoardResult<&str> {
        Ok(&self.labels[slot(player)?])
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Player", "Player")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_and_opponent() {
        assert_eq!(slot(QUEEN_ONE), Ok(0));
        assert_eq!(slot(QUEEN_TWO), Ok(1));
        assert_eq!(slot(0), Err(BoardError::UnknownPlayer(0)));
        assert_eq!(opponent(QUEEN_ONE), Ok(QUEEN_TWO));
        assert_eq!(opponent(QUEEN_TWO), Ok(QUEEN_ONE));
        assert!(opponent(3).is_err());
    }

    #[test]
    fn test_roster_labels() {
        let roster = Roster::new("GreedyAgent", "RandomAgent");
        assert_eq!(roster.label(QUEEN_ONE).unwrap(), "GreedyAgent - Q1");
        assert_eq!(roster.label(QUEEN_TWO).unwrap(), "RandomAgent - Q2");
        assert!(roster.label(9).is_err());
    }

    #[test]
    fn test_queen_symbol() {
        assert_eq!(queen_symbol(QUEEN_ONE), "Q1");
        assert_eq!(queen_symbol(QUEEN_TWO), "Q2");
    }
}
