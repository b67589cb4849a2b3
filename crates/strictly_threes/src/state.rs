//! Observable board state.

use super::direction::Direction;
use super::grid::Grid;
use super::phases::TurnPhase;
use serde::{Deserialize, Serialize};

/// Everything a board knows apart from its random source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// The tiles.
    pub(crate) grid: Grid,
    /// Total score, recomputed from the grid after each tile commit.
    pub(crate) score: u64,
    /// Value of the tile the next commit will place.
    pub(crate) next_tile: u32,
    /// Position in the shift / undo / commit protocol.
    pub(crate) phase: TurnPhase,
}

impl BoardState {
    /// Creates a state with no shift recorded.
    pub fn new(grid: Grid, score: u64, next_tile: u32) -> Self {
        Self {
            grid,
            score,
            next_tile,
            phase: TurnPhase::Idle,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the total score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the value of the next tile.
    pub fn next_tile(&self) -> u32 {
        self.next_tile
    }

    /// Returns the turn phase.
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Direction of the last effective shift, if any.
    pub fn last_direction(&self) -> Option<Direction> {
        self.phase.last_direction()
    }
}
