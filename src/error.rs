//! Error types for board construction and queries.

use std::fmt;

use crate::game::{Coord, PlayerId};

/// Caller-contract violations reported by the board.
///
/// In-game misbehaviour (timeouts, illegal moves) is not an error; it ends
/// the game with a [`crate::tournament::Termination`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Rows passed to [`crate::game::Grid::from_rows`] differ in length.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        found: usize,
    },
    /// A player id other than queen one or queen two.
    UnknownPlayer(PlayerId),
    /// A queen placed on more than one cell of an injected board.
    DuplicateQueen {
        /// Owner of the queen.
        player: PlayerId,
        /// First cell (row-major) holding it.
        first: Coord,
        /// Next cell holding it.
        second: Coord,
    },
    /// A coordinate outside the board.
    OutOfBounds(Coord),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {width}x{height}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::UnknownPlayer(id) => write!(f, "unknown player id {id} (expected 1 or 2)"),
            Self::DuplicateQueen {
                player,
                first,
                second,
            } => write!(f, "queen {player} appears at both {first} and {second}"),
            Self::OutOfBounds(coord) => write!(f, "coordinate {coord} is off the board"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
