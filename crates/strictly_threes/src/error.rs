//! Error types for grids, rules and the board.

use super::direction::Direction;

/// Error raised by grid construction and line projection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// The requested grid size cannot hold a game.
    #[display("Invalid grid size {}", _0)]
    InvalidSize(usize),

    /// A cell coordinate lies outside the grid.
    #[display("Cell ({}, {}) is outside a {}x{} grid", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid size.
        size: usize,
    },

    /// A line index lies outside the grid.
    #[display("Line {} is outside a {}x{} grid", index, size, size)]
    LineIndex {
        /// Requested row or column.
        index: usize,
        /// Grid size.
        size: usize,
    },

    /// A line written back does not match the grid size.
    #[display("Line has {} cells, expected {}", actual, expected)]
    LineLength {
        /// Grid size.
        expected: usize,
        /// Length of the given line.
        actual: usize,
    },

    /// Rows handed to the grid do not form a square.
    #[display("Grid rows are not square")]
    NotSquare,
}

impl std::error::Error for GridError {}

/// Error raised when a rule is applied outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RuleError {
    /// The value is not 1, 2, or 3 doubled some number of times.
    #[display("Value {} is not on the canonical doubling sequence", _0)]
    NonCanonicalValue(u32),

    /// The spawn edge for the direction has no empty cell.
    #[display("No empty cell on the spawn edge after shifting {}", _0)]
    NoEmptyEdgeCell(Direction),

    /// The grid rejected an operation.
    #[display("{}", _0)]
    Grid(GridError),
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for RuleError {
    fn from(err: GridError) -> Self {
        RuleError::Grid(err)
    }
}

/// Error raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A shift was requested while the previous one is still pending.
    #[display("Shift {} is pending; undo or commit it first", _0)]
    ShiftPending(Direction),

    /// Undo or commit was requested with no pending shift.
    #[display("No shift is pending")]
    NoPendingShift,

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// A rule rejected the operation.
    #[display("{}", _0)]
    Rule(RuleError),

    /// The grid rejected the operation.
    #[display("{}", _0)]
    Grid(GridError),
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Rule(err) => Some(err),
            BoardError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RuleError> for BoardError {
    fn from(err: RuleError) -> Self {
        BoardError::Rule(err)
    }
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}
