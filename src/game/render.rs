//! Fixed-width ASCII board printing.

// format! with push_str reads better here; the allocations don't matter for diagnostics
#![allow(clippy::format_push_string)]

use crate::game::player::queen_symbol;
use crate::game::{Cell, Coord, Grid};

/// Marker for a legal destination.
const LEGAL_MARK: &str = "o ";

/// Marker for a blocked cell.
const BLOCKED_MARK: &str = "><";

/// Marker for a blank cell.
const BLANK_MARK: &str = "  ";

/// Row separator.
const ROW_BREAK: &str = "\r\n";

/// Render the board as a fixed-width ASCII grid.
///
/// Output format (3x2 board, queen one at (1,0), one legal move marked):
/// ```text
///   |0 |1 |2 |
/// 0 |o |Q1|><|
/// 1 |  |  |Q2|
/// ```
/// Rows are separated by `\r\n`; there is no trailing separator.
#[must_use]
pub fn render_board(grid: &Grid, legal_moves: &[Coord]) -> String {
    let width = grid.width();
    let height = grid.height();
    let mut out = String::from("  |");

    for col in 0..width {
        out.push_str(&format!("{col} |"));
    }
    out.push_str(ROW_BREAK);

    for row in 0..height {
        out.push_str(&format!("{row} |"));
        for col in 0..width {
            let coord = Coord::new(col, row);
            match grid.get(coord) {
                Some(Cell::Occupied(player)) => out.push_str(&queen_symbol(player)),
                Some(Cell::Blocked) => out.push_str(BLOCKED_MARK),
                _ if legal_moves.contains(&coord) => out.push_str(LEGAL_MARK),
                _ => out.push_str(BLANK_MARK),
            }
            out.push('|');
        }
        if row + 1 < height {
            out.push_str(ROW_BREAK);
        }
    }

    out
}
