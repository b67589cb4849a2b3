//! First-class invariants for the board state.
//!
//! Invariants are logical properties that hold after every board
//! operation except [`Board::set_cell`](crate::Board::set_cell), which
//! bypasses them. They are audited in debug builds and can be checked on
//! demand.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod canonical_tiles;
pub mod next_tile;
pub mod score_consistent;

pub use canonical_tiles::CanonicalTilesInvariant;
pub use next_tile::NextTileInvariant;
pub use score_consistent::ScoreConsistentInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    CanonicalTilesInvariant,
    ScoreConsistentInvariant,
    NextTileInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, state::BoardState};

    fn state(rows: Vec<Vec<u32>>, score: u64, next_tile: u32) -> BoardState {
        BoardState::new(Grid::from_rows(rows).unwrap(), score, next_tile)
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_state() {
        let s = state(vec![vec![1, 2], vec![0, 0]], 0, 3);
        assert!(BoardInvariants::check_all(&s).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let s = state(vec![vec![5, 2], vec![0, 0]], 7, 4);
        let violations = BoardInvariants::check_all(&s).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CanonicalTilesInvariant, NextTileInvariant);
        let s = state(vec![vec![3, 6], vec![12, 0]], 0, 6);
        assert!(TwoInvariants::check_all(&s).is_ok());
    }
}
