//! Move records produced by a shift.
//!
//! A shift is reported as a list of domain events: every tile that slid
//! or merged, with enough detail for a client to animate it.

use super::direction::Direction;
use super::types::Cell;
use serde::{Deserialize, Serialize};

/// The two tile values combined by a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeOperands {
    /// Value of the tile that moved onto its neighbour.
    pub moved: u32,
    /// Value of the tile that stayed in place.
    pub stationary: u32,
}

/// One tile moving within an oriented line.
///
/// Indices are line offsets: 0 is the edge the line shifts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineMove {
    /// Offset the tile came from.
    pub from: usize,
    /// Offset the tile ended up at.
    pub to: usize,
    /// Value now at `to`.
    pub value: u32,
    /// Operands, if the tile merged with the one at `to`.
    pub merged: Option<MergeOperands>,
}

impl LineMove {
    /// A tile sliding into an empty cell.
    pub fn slide(from: usize, to: usize, value: u32) -> Self {
        Self {
            from,
            to,
            value,
            merged: None,
        }
    }

    /// A tile merging into its neighbour.
    pub fn merge(from: usize, to: usize, moved: u32, stationary: u32, value: u32) -> Self {
        Self {
            from,
            to,
            value,
            merged: Some(MergeOperands { moved, stationary }),
        }
    }

    /// Returns true if this move combined two tiles.
    pub fn is_merge(&self) -> bool {
        self.merged.is_some()
    }
}

/// A line move resolved to absolute grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row (horizontal shifts) or column (vertical shifts) of the line.
    pub row_or_column: usize,
    /// Direction of the shift.
    pub direction: Direction,
    /// The move in line offsets.
    pub line_move: LineMove,
    /// Cell the tile came from.
    pub from: Cell,
    /// Cell the tile ended up at.
    pub to: Cell,
}

impl Move {
    /// Resolves a line move of line `row_or_column` on a `size` grid.
    ///
    /// Offsets must be below `size`.
    pub(crate) fn resolve(line_move: LineMove, row_or_column: usize, direction: Direction, size: usize) -> Self {
        Self {
            row_or_column,
            direction,
            line_move,
            from: direction.cell(size, row_or_column, line_move.from),
            to: direction.cell(size, row_or_column, line_move.to),
        }
    }

    /// Value now at the destination cell.
    pub fn value(&self) -> u32 {
        self.line_move.value
    }

    /// Returns true if this move combined two tiles.
    pub fn is_merge(&self) -> bool {
        self.line_move.is_merge()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_move.merged {
            Some(MergeOperands { moved, stationary }) => write!(
                f,
                "{} -> {}: {} + {} = {}",
                self.from,
                self.to,
                moved,
                stationary,
                self.value()
            ),
            None => write!(f, "{} -> {}: {}", self.from, self.to, self.value()),
        }
    }
}

/// Result of a shift request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftOutcome {
    /// The grid changed; every slide and merge is listed.
    Moved(Vec<Move>),
    /// Nothing could move in that direction.
    NoOp,
}

impl ShiftOutcome {
    /// Returns the moves, empty for a no-op.
    pub fn moves(&self) -> &[Move] {
        match self {
            ShiftOutcome::Moved(moves) => moves,
            ShiftOutcome::NoOp => &[],
        }
    }

    /// Returns true if the shift changed nothing.
    pub fn is_noop(&self) -> bool {
        matches!(self, ShiftOutcome::NoOp)
    }
}
