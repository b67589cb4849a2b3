//! Merge eligibility for adjacent tiles.

use tracing::instrument;

/// Returns the value produced by merging `a` and `b`, or 0 if they cannot merge.
///
/// A 1 merges only with a 2. Values of 3 and above merge only with an
/// equal value. A merge always produces `a + b`; pairs whose sum does not
/// fit in a tile never merge.
#[instrument(level = "trace")]
pub fn merge_values(a: u32, b: u32) -> u32 {
    let Some(sum) = a.checked_add(b) else {
        return 0;
    };
    if (a > 0 && b > 0 && sum == 3) || (a >= 3 && a == b) {
        sum
    } else {
        0
    }
}
