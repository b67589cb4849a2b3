//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are checked on every call;
//! postconditions in debug builds only.

use super::direction::Direction;
use super::error::BoardError;
use super::rules::total_score;
use super::state::BoardState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BoardError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BoardError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no shift may be awaiting undo or commit.
pub struct NoPendingShift;

impl NoPendingShift {
    /// Fails with the direction of the pending shift, if any.
    #[instrument(skip(state))]
    pub fn check(state: &BoardState) -> Result<(), BoardError> {
        match state.phase().pending_direction() {
            Some(direction) => Err(BoardError::ShiftPending(direction)),
            None => Ok(()),
        }
    }
}

/// Precondition: a shift must be awaiting undo or commit.
pub struct HasPendingShift;

impl HasPendingShift {
    /// Returns the direction of the pending shift.
    #[instrument(skip(state))]
    pub fn check(state: &BoardState) -> Result<Direction, BoardError> {
        state
            .phase()
            .pending_direction()
            .ok_or(BoardError::NoPendingShift)
    }
}

// ─────────────────────────────────────────────────────────────
//  Shift Contract
// ─────────────────────────────────────────────────────────────

/// Contract for shift actions.
///
/// Preconditions:
/// - No shift is pending
///
/// Postconditions:
/// - Grid size is unchanged
/// - The sum of tile values is conserved (slides and merges only move value)
/// - Score and next tile are untouched
pub struct ShiftContract;

impl Contract<BoardState, Direction> for ShiftContract {
    fn pre(state: &BoardState, _direction: &Direction) -> Result<(), BoardError> {
        NoPendingShift::check(state)
    }

    fn post(before: &BoardState, after: &BoardState) -> Result<(), BoardError> {
        if before.grid().size() != after.grid().size() {
            return Err(violation("Shift changed the grid size"));
        }
        if before.grid().value_sum() != after.grid().value_sum() {
            warn!(
                before = before.grid().value_sum(),
                after = after.grid().value_sum(),
                "Tile value sum changed during shift"
            );
            return Err(violation("Shift did not conserve the tile value sum"));
        }
        if before.score() != after.score() || before.next_tile() != after.next_tile() {
            return Err(violation("Shift touched the score or next tile"));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Commit Contract
// ─────────────────────────────────────────────────────────────

/// Contract for tile commits.
///
/// Preconditions:
/// - A shift is pending
///
/// Postconditions:
/// - Exactly one more cell is occupied
/// - The score equals the total score of the new grid
pub struct CommitContract;

impl Contract<BoardState, ()> for CommitContract {
    fn pre(state: &BoardState, _action: &()) -> Result<(), BoardError> {
        HasPendingShift::check(state).map(|_| ())
    }

    fn post(before: &BoardState, after: &BoardState) -> Result<(), BoardError> {
        if after.grid().occupied() != before.grid().occupied() + 1 {
            return Err(violation("Commit did not add exactly one tile"));
        }
        let total = total_score(after.grid())?;
        if total != after.score() {
            warn!(total, score = after.score(), "Score out of sync after commit");
            return Err(violation("Score does not match the grid after commit"));
        }
        Ok(())
    }
}

fn violation(description: &str) -> BoardError {
    BoardError::InvariantViolation(format!("Postcondition failed: {}", description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, TurnPhase};

    fn idle() -> BoardState {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![0, 0]]).unwrap();
        BoardState::new(grid, 0, 1)
    }

    fn pending(direction: Direction) -> BoardState {
        let mut state = idle();
        state.phase = TurnPhase::ShiftPending {
            direction,
            snapshot: state.grid.clone(),
        };
        state
    }

    #[test]
    fn test_shift_precondition() {
        assert!(ShiftContract::pre(&idle(), &Direction::Left).is_ok());
        assert_eq!(
            ShiftContract::pre(&pending(Direction::Up), &Direction::Left),
            Err(BoardError::ShiftPending(Direction::Up))
        );
    }

    #[test]
    fn test_commit_precondition() {
        assert_eq!(
            CommitContract::pre(&idle(), &()),
            Err(BoardError::NoPendingShift)
        );
        assert!(CommitContract::pre(&pending(Direction::Down), &()).is_ok());
    }

    #[test]
    fn test_shift_postcondition_detects_lost_value() {
        let before = idle();
        let mut after = idle();
        after.grid = Grid::from_rows(vec![vec![3, 0], vec![0, 0]]).unwrap();
        assert!(ShiftContract::post(&before, &after).is_ok());

        after.grid = Grid::from_rows(vec![vec![1, 0], vec![0, 0]]).unwrap();
        assert!(matches!(
            ShiftContract::post(&before, &after),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_commit_postcondition() {
        let before = idle();
        let mut after = idle();
        after.grid = Grid::from_rows(vec![vec![1, 2], vec![0, 3]]).unwrap();
        after.score = 9;
        assert!(CommitContract::post(&before, &after).is_ok());

        after.score = 0;
        assert!(CommitContract::post(&before, &after).is_err());
    }
}
