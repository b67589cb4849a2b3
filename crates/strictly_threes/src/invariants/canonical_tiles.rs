//! Canonical tiles invariant: every tile is a value the game can produce.

use super::super::rules::score_for_value;
use super::super::state::BoardState;
use super::Invariant;

/// Invariant: every cell is 0, 1, 2, or 3 doubled some number of times.
pub struct CanonicalTilesInvariant;

impl Invariant<BoardState> for CanonicalTilesInvariant {
    fn holds(state: &BoardState) -> bool {
        state
            .grid()
            .cells()
            .iter()
            .all(|&value| score_for_value(value).is_ok())
    }

    fn description() -> &'static str {
        "Every tile is 0, 1, 2, or 3 doubled n times"
    }
}
