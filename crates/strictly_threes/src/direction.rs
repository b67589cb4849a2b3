//! Shift directions and the line orientation they imply.

use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction in which the grid is shifted.
///
/// A direction also fixes how rows and columns are read as lines: offset 0
/// of a line is always the edge the tiles move toward, so one line
/// algorithm serves all four directions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Tiles move toward column 0.
    #[strum(to_string = "left", serialize = "l")]
    Left,
    /// Tiles move toward the last column.
    #[strum(to_string = "right", serialize = "r")]
    Right,
    /// Tiles move toward row 0.
    #[strum(to_string = "up", serialize = "u")]
    Up,
    /// Tiles move toward the last row.
    #[strum(to_string = "down", serialize = "d")]
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if this direction moves tiles along rows.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Maps offset `offset` of line `index` to its grid cell.
    ///
    /// Lines are rows for horizontal directions and columns for vertical
    /// ones. Offset 0 is the cell on the edge the tiles move toward, so
    /// `Right` reads rows right-to-left and `Down` reads columns
    /// bottom-to-top.
    #[instrument(level = "trace")]
    pub fn cell(self, size: usize, index: usize, offset: usize) -> Cell {
        let flipped = size - 1 - offset;
        match self {
            Direction::Left => Cell::new(index, offset),
            Direction::Right => Cell::new(index, flipped),
            Direction::Up => Cell::new(offset, index),
            Direction::Down => Cell::new(flipped, index),
        }
    }
}
