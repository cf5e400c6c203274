//! Grid and cell types.

use std::fmt;

use serde::Serialize;

use crate::error::{BoardError, BoardResult};
use crate::game::PlayerId;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// Column (width axis).
    pub col: u16,
    /// Row (height axis).
    pub row: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Step `distance` cells along `(dc, dr)`.
    ///
    /// Returns `None` when the result would be negative or beyond `u16`.
    #[must_use]
    #[inline]
    pub fn offset(self, dc: i32, dr: i32, distance: i32) -> Option<Coord> {
        let col = i32::from(self.col) + dc * distance;
        let row = i32::from(self.row) + dr * distance;
        Some(Coord::new(
            u16::try_from(col).ok()?,
            u16::try_from(row).ok()?,
        ))
    }

    /// Largest per-axis distance between two coordinates.
    #[must_use]
    pub fn axis_distance(self, other: Coord) -> u16 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// Get orthogonal neighbours (up, down, left, right) inside the board.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, width: u16, height: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.row > 0 {
            result[count as usize] = Coord::new(self.col, self.row - 1); // up
            count += 1;
        }
        if self.row + 1 < height {
            result[count as usize] = Coord::new(self.col, self.row + 1); // down
            count += 1;
        }
        if self.col > 0 {
            result[count as usize] = Coord::new(self.col - 1, self.row); // left
            count += 1;
        }
        if self.col + 1 < width {
            result[count as usize] = Coord::new(self.col + 1, self.row); // right
            count += 1;
        }

        (result, count)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

impl From<(u16, u16)> for Coord {
    fn from((col, row): (u16, u16)) -> Self {
        Self::new(col, row)
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Cell {
    /// Open and reachable.
    #[default]
    Blank,
    /// Permanently impassable (vacated or cratered).
    Blocked,
    /// Holds the given player's queen.
    Occupied(PlayerId),
}

impl Cell {
    /// Check if a queen may land on this cell.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// The rectangular cell array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width of the grid in cells.
    width: u16,
    /// Height of the grid in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid filled with blank cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if width or height is zero.
    pub fn new(width: u16, height: u16) -> BoardResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions {
                width: usize::from(width),
                height: usize::from(height),
            });
        }

        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Blank; size],
        })
    }

    /// Build a grid from explicit rows, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for an empty or oversized
    /// grid and [`BoardError::RaggedRows`] if rows differ in length.
    pub fn from_rows(rows: &[Vec<Cell>]) -> BoardResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(BoardError::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
        }

        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    /// A blank grid with the same dimensions.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Blank; self.cells.len()],
        }
    }

    /// Get the width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Raw cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Convert a coordinate to an index into the cell array.
    #[must_use]
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.width) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Check if the coordinate is on the board and blank.
    #[must_use]
    #[inline]
    pub fn is_blank(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_blank)
    }

    /// Block the cell if it is currently blank; otherwise leave it alone.
    ///
    /// Returns `true` if the cell changed.
    pub fn block_if_blank(&mut self, coord: Coord) -> bool {
        match self.coord_to_index(coord) {
            Some(idx) if self.cells[idx].is_blank() => {
                self.cells[idx] = Cell::Blocked;
                true
            }
            _ => false,
        }
    }

    /// Iterate over all coordinates and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = usize::from(self.width);
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx % width) as u16, (idx / width) as u16);
            (coord, *cell)
        })
    }

    /// First cell (row-major) occupied by `player`.
    #[must_use]
    pub fn find_queen(&self, player: PlayerId) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| *cell == Cell::Occupied(player))
            .map(|(coord, _)| coord)
    }

    /// Count blocked cells.
    #[must_use]
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Blocked).count()
    }

    /// Count cells holding any queen.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(_)))
            .count()
    }
}
