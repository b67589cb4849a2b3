//! Tile and grid scoring.

use super::super::error::RuleError;
use super::super::grid::Grid;
use tracing::instrument;

/// Returns the score of a single tile.
///
/// Tiles below 3 score nothing. A tile of `3 * 2^n` scores `3^(n + 1)`,
/// so 3 scores 9, 6 scores 27 and 48 scores 243.
///
/// # Errors
///
/// Returns [`RuleError::NonCanonicalValue`] for values of 3 or more that
/// are not 3 doubled some number of times.
#[instrument(level = "trace")]
pub fn score_for_value(value: u32) -> Result<u64, RuleError> {
    if value < 3 {
        return Ok(0);
    }
    if value % 3 != 0 || !(value / 3).is_power_of_two() {
        return Err(RuleError::NonCanonicalValue(value));
    }
    let doublings = (value / 3).trailing_zeros();
    Ok(3u64.pow(doublings + 1))
}

/// Sums the tile scores over the whole grid.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn total_score(grid: &Grid) -> Result<u64, RuleError> {
    grid.cells()
        .iter()
        .try_fold(0u64, |total, &value| Ok(total + score_for_value(value)?))
}
