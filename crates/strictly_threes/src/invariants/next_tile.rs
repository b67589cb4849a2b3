//! Next tile invariant: the previewed tile is a spawnable value.

use super::super::rules::spawn::SPAWN_VALUES;
use super::super::state::BoardState;
use super::Invariant;

/// Invariant: the previewed next tile is 1, 2, 3 or 6.
pub struct NextTileInvariant;

impl Invariant<BoardState> for NextTileInvariant {
    fn holds(state: &BoardState) -> bool {
        SPAWN_VALUES.contains(&state.next_tile())
    }

    fn description() -> &'static str {
        "Next tile is one of 1, 2, 3, 6"
    }
}
