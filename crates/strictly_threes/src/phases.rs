//! Turn phases of the shift / undo / commit protocol.
//!
//! A turn is two steps: a shift, then either an undo or a tile commit.
//! The phase records where the board is in that protocol, so undo and
//! commit can be rejected when there is nothing to resolve.

use super::direction::Direction;
use super::grid::Grid;
use serde::{Deserialize, Serialize};

/// How a pending shift was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The shift was reverted.
    Undone,
    /// A new tile was placed after the shift.
    Committed,
}

/// Where the board is in the turn protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No shift recorded, or the last shift changed nothing.
    #[default]
    Idle,
    /// A shift changed the grid and awaits undo or commit.
    ShiftPending {
        /// Direction of the pending shift.
        direction: Direction,
        /// Grid as it was before the shift.
        snapshot: Grid,
    },
    /// The last shift was undone or committed.
    Resolved {
        /// Direction of the last shift.
        direction: Direction,
        /// How it was resolved.
        resolution: Resolution,
    },
}

impl TurnPhase {
    /// Returns true while a shift awaits undo or commit.
    pub fn is_pending(&self) -> bool {
        matches!(self, TurnPhase::ShiftPending { .. })
    }

    /// Direction of the last effective shift, if any.
    pub fn last_direction(&self) -> Option<Direction> {
        match self {
            TurnPhase::Idle => None,
            TurnPhase::ShiftPending { direction, .. } => Some(*direction),
            TurnPhase::Resolved { direction, .. } => Some(*direction),
        }
    }

    /// Direction of the pending shift, if one is pending.
    pub fn pending_direction(&self) -> Option<Direction> {
        match self {
            TurnPhase::ShiftPending { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Idle => write!(f, "Idle"),
            TurnPhase::ShiftPending { direction, .. } => write!(f, "Shift {} pending", direction),
            TurnPhase::Resolved {
                direction,
                resolution,
            } => write!(f, "Shift {} {:?}", direction, resolution),
        }
    }
}
