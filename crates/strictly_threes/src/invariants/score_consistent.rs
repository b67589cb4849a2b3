//! Score consistency invariant: the score is derived from the grid.

use super::super::rules::total_score;
use super::super::state::BoardState;
use super::Invariant;

/// Invariant: outside a pending shift, the score equals the grid's total score.
///
/// A shift leaves the score untouched until its tile is committed, so a
/// pending shift is exempt.
pub struct ScoreConsistentInvariant;

impl Invariant<BoardState> for ScoreConsistentInvariant {
    fn holds(state: &BoardState) -> bool {
        if state.phase().is_pending() {
            return true;
        }
        total_score(state.grid()).is_ok_and(|total| total == state.score())
    }

    fn description() -> &'static str {
        "Score equals the sum of tile scores once no shift is pending"
    }
}
