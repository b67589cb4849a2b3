//! Small coordinate types shared by the rules and the board.

use serde::{Deserialize, Serialize};

/// An absolute cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, 0 is the top row.
    pub row: usize,
    /// Column index, 0 is the leftmost column.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A newly spawned tile: where it appears and its value.
///
/// Positions produced by the rules carry value 0; the board fills in the
/// previewed tile value before placing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value of the new tile.
    pub value: u32,
}

impl TilePosition {
    /// Creates a new tile position.
    pub fn new(row: usize, col: usize, value: u32) -> Self {
        Self { row, col, value }
    }

    /// Returns the cell this tile occupies.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// Returns a copy carrying the given value.
    pub fn with_value(self, value: u32) -> Self {
        Self { value, ..self }
    }
}

impl std::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.value, self.cell())
    }
}
