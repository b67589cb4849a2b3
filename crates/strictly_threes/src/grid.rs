//! Square tile grid and oriented line projection.

use super::direction::Direction;
use super::error::GridError;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square grid of tile values in row-major order.
///
/// Zero marks an empty cell. The size is fixed at construction.
/// Serialized as a list of rows; deserialization goes through
/// [`Grid::from_rows`], so only square grids are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Creates an empty `size` x `size` grid.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a grid from rows, which must form a non-empty square.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(GridError::NotSquare);
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Returns the value at the given cell, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Returns the value at the given cell coordinate.
    pub fn at(&self, cell: Cell) -> Option<u32> {
        self.get(cell.row, cell.col)
    }

    /// Sets the value at the given cell.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GridError> {
        let i = self.index_of(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Returns true if the cell exists and holds no tile.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.at(cell) == Some(0)
    }

    /// Number of cells holding a tile.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile value on the grid.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values. Shifting never changes it.
    pub fn value_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Copies row or column `index` into a line oriented for `direction`.
    ///
    /// Offset 0 of the returned line is the cell on the edge that
    /// `direction` shifts toward.
    #[instrument(skip(self), level = "trace")]
    pub fn line(&self, index: usize, direction: Direction) -> Result<Vec<u32>, GridError> {
        self.check_line_index(index)?;
        Ok((0..self.size)
            .map(|offset| {
                let cell = direction.cell(self.size, index, offset);
                self.cells[cell.row * self.size + cell.col]
            })
            .collect())
    }

    /// Returns a new grid with row or column `index` replaced by `line`.
    ///
    /// This is the inverse of [`Grid::line`] for the same direction.
    #[instrument(skip(self, line), level = "trace")]
    pub fn with_line(
        &self,
        index: usize,
        direction: Direction,
        line: &[u32],
    ) -> Result<Grid, GridError> {
        self.check_line_index(index)?;
        if line.len() != self.size {
            return Err(GridError::LineLength {
                expected: self.size,
                actual: line.len(),
            });
        }
        let mut next = self.clone();
        for (offset, &value) in line.iter().enumerate() {
            let cell = direction.cell(self.size, index, offset);
            next.cells[cell.row * self.size + cell.col] = value;
        }
        Ok(next)
    }

    /// Cells where a tile may spawn after shifting in `direction`.
    ///
    /// These lie on the edge opposite the shift: the far end of every line.
    pub fn spawn_edge(&self, direction: Direction) -> Vec<Cell> {
        (0..self.size)
            .map(|index| direction.cell(self.size, index, self.size - 1))
            .collect()
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn check_line_index(&self, index: usize) -> Result<(), GridError> {
        if index >= self.size {
            return Err(GridError::LineIndex {
                index,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().to_string().len().max(1);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", v)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", cells)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[u32]>::to_vec).collect()
    }
}
