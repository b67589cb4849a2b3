//! The single-line shift.

use super::super::action::LineMove;
use super::merge::merge_values;
use tracing::{instrument, trace};

/// Shifts one oriented line a single step toward offset 0.
///
/// The line is scanned once from the front. At each offset `i`:
/// - if cell `i` is empty, cell `i + 1` slides into it;
/// - otherwise, if cells `i` and `i + 1` merge, the merged value lands in
///   cell `i` and cell `i + 1` empties.
///
/// After the first gap or merge every later tile slides one step, so at
/// most one merge happens per line. Returns every slide and merge in scan
/// order; an unchanged line yields no moves.
#[instrument(level = "trace")]
pub fn shift_line(line: &mut [u32]) -> Vec<LineMove> {
    let mut moves = Vec::new();

    for i in 0..line.len().saturating_sub(1) {
        if line[i] == 0 {
            line[i] = line[i + 1];
            line[i + 1] = 0;
            if line[i] != 0 {
                moves.push(LineMove::slide(i + 1, i, line[i]));
            }
        } else {
            let merged = merge_values(line[i], line[i + 1]);
            if merged != 0 {
                let moved = line[i + 1];
                let stationary = line[i];
                line[i] = merged;
                line[i + 1] = 0;
                moves.push(LineMove::merge(i + 1, i, moved, stationary, merged));
            }
        }
    }

    trace!(move_count = moves.len(), "Line shifted");
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_then_slide_rest() {
        let mut line = [1, 2, 3, 3];
        let moves = shift_line(&mut line);
        assert_eq!(line, [3, 3, 3, 0]);
        assert_eq!(
            moves,
            vec![
                LineMove::merge(1, 0, 2, 1, 3),
                LineMove::slide(2, 1, 3),
                LineMove::slide(3, 2, 3),
            ]
        );
    }

    #[test]
    fn test_gap_fill_only_at_empty_cell() {
        let mut line = [1, 1, 0, 2];
        let moves = shift_line(&mut line);
        assert_eq!(line, [1, 1, 2, 0]);
        assert_eq!(moves, vec![LineMove::slide(3, 2, 2)]);
    }

    #[test]
    fn test_leading_gap_moves_whole_line() {
        let mut line = [0, 3, 0, 6];
        let moves = shift_line(&mut line);
        assert_eq!(line, [3, 0, 6, 0]);
        assert_eq!(moves, vec![LineMove::slide(1, 0, 3), LineMove::slide(3, 2, 6)]);
    }

    #[test]
    fn test_compacted_line_is_unchanged() {
        let mut line = [3, 1, 6, 2];
        let moves = shift_line(&mut line);
        assert_eq!(line, [3, 1, 6, 2]);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_empty_line_is_unchanged() {
        let mut line = [0, 0, 0, 0];
        assert!(shift_line(&mut line).is_empty());
        assert_eq!(line, [0, 0, 0, 0]);
    }

    #[test]
    fn test_leftmost_merge_wins() {
        let mut line = [3, 1, 2, 6, 6];
        let moves = shift_line(&mut line);
        assert_eq!(line, [3, 3, 6, 6, 0]);
        assert_eq!(moves.iter().filter(|m| m.is_merge()).count(), 1);
    }

    #[test]
    fn test_short_lines() {
        let mut empty: [u32; 0] = [];
        assert!(shift_line(&mut empty).is_empty());
        let mut single = [3];
        assert!(shift_line(&mut single).is_empty());
    }
}
