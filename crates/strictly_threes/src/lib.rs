//! Strictly Threes - pure game logic for a Threes-style sliding tile puzzle.
//!
//! A square grid of numbered tiles shifts one step at a time in one of four
//! directions. A 1 merges with a 2, and equal tiles of 3 or more merge into
//! their sum. After each shift the player either undoes it or commits a new
//! tile, which appears on the edge opposite the shift.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): stateless merge, score, line shift and spawn rules
//! - **Board** ([`Board`]): grid, score, previewed tile and the turn protocol
//! - **Contracts & invariants**: pre/postconditions checked around transitions
//! - **Sources** ([`TileSource`]): injected randomness, seeded or scripted
//!
//! # Example
//!
//! ```
//! use strictly_threes::{Board, Direction, ShiftOutcome};
//!
//! # fn main() -> Result<(), strictly_threes::BoardError> {
//! let mut board = Board::seeded(4, 2024)?;
//! let direction = board.available_directions()[0];
//! if let ShiftOutcome::Moved(moves) = board.shift(direction)? {
//!     assert!(!moves.is_empty());
//!     let tile = board.commit_new_tile()?.expect("a shift is pending");
//!     assert_eq!(board.cell(tile.row, tile.col), Some(tile.value));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod direction;
mod error;
mod grid;
mod invariants;
mod phases;
pub mod rules;
mod shared;
mod source;
mod state;
mod types;

// Crate-level exports - Domain types
pub use action::{LineMove, MergeOperands, Move, ShiftOutcome};
pub use direction::Direction;
pub use grid::Grid;
pub use types::{Cell, TilePosition};

// Crate-level exports - Board and turn protocol
pub use board::{Board, shift_grid};
pub use phases::{Resolution, TurnPhase};
pub use shared::SharedBoard;
pub use state::BoardState;

// Crate-level exports - Contracts and invariants
pub use contracts::{CommitContract, Contract, HasPendingShift, NoPendingShift, ShiftContract};
pub use invariants::{
    BoardInvariants, CanonicalTilesInvariant, Invariant, InvariantSet, InvariantViolation,
    NextTileInvariant, ScoreConsistentInvariant,
};

// Crate-level exports - Errors
pub use error::{BoardError, GridError, RuleError};

// Crate-level exports - Randomness
pub use source::{ScriptedSource, SeededSource, TileSource};
