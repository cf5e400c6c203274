//! Legal move generation.
//!
//! A queen that has not moved yet may be placed on any blank cell. After
//! that it slides along one of eight rays and may stop on any blank cell
//! before the first edge or non-blank cell.

use crate::game::{Coord, Grid};

/// The eight unit directions `(dc, dr)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Every legal destination for a queen at `position` (`None` = not moved).
///
/// Emission order is direction-major then distance-increasing for a placed
/// queen, row-major for an unplaced one. Callers should treat the result
/// as a set.
#[must_use]
pub fn legal_moves(grid: &Grid, position: Option<Coord>) -> Vec<Coord> {
    match position {
        None => first_moves(grid),
        Some(from) => {
            let mut moves = Vec::with_capacity(4 * usize::from(grid.width().max(grid.height())));
            for_each_ray_cell(grid, from, |coord| {
                moves.push(coord);
                true
            });
            moves
        }
    }
}

/// Every blank cell, row-major.
#[must_use]
pub fn first_moves(grid: &Grid) -> Vec<Coord> {
    grid.iter()
        .filter(|(_, cell)| cell.is_blank())
        .map(|(coord, _)| coord)
        .collect()
}

/// Check whether a queen at `position` has at least one legal move.
///
/// Stops at the first destination found.
#[must_use]
pub fn has_legal_move(grid: &Grid, position: Option<Coord>) -> bool {
    match position {
        None => grid.cells().iter().any(|cell| cell.is_blank()),
        Some(from) => {
            let mut found = false;
            for_each_ray_cell(grid, from, |_| {
                found = true;
                false
            });
            found
        }
    }
}

/// Count legal moves without allocating.
#[must_use]
pub fn count_legal_moves(grid: &Grid, position: Option<Coord>) -> usize {
    match position {
        None => grid.cells().iter().filter(|cell| cell.is_blank()).count(),
        Some(from) => {
            let mut count = 0;
            for_each_ray_cell(grid, from, |_| {
                count += 1;
                true
            });
            count
        }
    }
}

/// Walk every ray from `from`, calling `visit` on each reachable blank cell.
///
/// `visit` returns `false` to stop the whole walk.
#[inline]
fn for_each_ray_cell(grid: &Grid, from: Coord, mut visit: impl FnMut(Coord) -> bool) {
    let max_distance = i32::from(grid.width().max(grid.height()));
    for (dc, dr) in DIRECTIONS {
        for distance in 1..max_distance {
            match from.offset(dc, dr, distance) {
                Some(coord) if grid.is_blank(coord) => {
                    if !visit(coord) {
                        return;
                    }
                }
                _ => break,
            }
        }
    }
}
