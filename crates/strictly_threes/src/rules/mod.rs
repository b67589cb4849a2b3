//! Game rules for Threes.
//!
//! This module contains pure functions: merge eligibility, tile scores,
//! the single-line shift, and the distributions for new tiles. Rules are
//! separated from the board so they can be tested and composed on their own.

pub mod merge;
pub mod score;
pub mod shift;
pub mod spawn;

pub use merge::merge_values;
pub use score::{score_for_value, total_score};
pub use shift::shift_line;
pub use spawn::{initialize_grid, next_tile_position, next_tile_value};
