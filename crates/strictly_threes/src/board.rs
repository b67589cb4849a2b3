//! Stateful Threes board.
//!
//! The board owns the grid, score and previewed tile, and drives the
//! two-step turn protocol: [`Board::shift`], then either [`Board::undo`] or
//! [`Board::commit_new_tile`].

use super::action::{Move, ShiftOutcome};
#[cfg(debug_assertions)]
use super::contracts::CommitContract;
use super::contracts::{Contract, HasPendingShift, ShiftContract};
use super::direction::Direction;
use super::error::{BoardError, GridError};
use super::grid::Grid;
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::phases::{Resolution, TurnPhase};
use super::rules::{
    initialize_grid, next_tile_position, next_tile_value, score_for_value, shift_line, total_score,
};
use super::source::{SeededSource, TileSource};
use super::state::BoardState;
use super::types::TilePosition;
use tracing::{debug, info, instrument, warn};

/// Shifts every line of `grid` one step in `direction`.
///
/// Returns the shifted grid and every slide and merge resolved to grid
/// coordinates. The input grid is not modified.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn shift_grid(grid: &Grid, direction: Direction) -> Result<(Grid, Vec<Move>), GridError> {
    let size = grid.size();
    let mut next = grid.clone();
    let mut moves = Vec::new();

    for index in 0..size {
        let mut line = grid.line(index, direction)?;
        let line_moves = shift_line(&mut line);
        moves.extend(
            line_moves
                .into_iter()
                .map(|line_move| Move::resolve(line_move, index, direction, size)),
        );
        next = next.with_line(index, direction, &line)?;
    }

    Ok((next, moves))
}

/// A Threes board driven by a random source `S`.
#[derive(Debug, Clone)]
pub struct Board<S = SeededSource> {
    state: BoardState,
    source: S,
}

impl Board<SeededSource> {
    /// Creates a board whose randomness is reproducible from `seed`.
    #[instrument]
    pub fn seeded(size: usize, seed: u64) -> Result<Self, BoardError> {
        Self::new(size, SeededSource::new(seed))
    }

    /// Creates a board seeded from the operating system.
    #[instrument]
    pub fn from_entropy(size: usize) -> Result<Self, BoardError> {
        Self::new(size, SeededSource::from_entropy())
    }
}

impl<S: TileSource> Board<S> {
    /// Creates a `size` x `size` board with a 1 and a 2 placed at random.
    ///
    /// The first next-tile value is drawn immediately so it can be
    /// previewed before the first shift.
    #[instrument(skip(source))]
    pub fn new(size: usize, mut source: S) -> Result<Self, BoardError> {
        let grid = initialize_grid(size, &mut source)?;
        let score = total_score(&grid)?;
        let next_tile = next_tile_value(&mut source);
        info!(size, next_tile, "Board created");

        Ok(Self {
            state: BoardState::new(grid, score, next_tile),
            source,
        })
    }

    /// Returns the tile value at the given cell, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.state.grid.get(row, col)
    }

    /// Overwrites a cell.
    ///
    /// Intended for tests and puzzle setup only: it bypasses the turn
    /// protocol and does not update the score.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Result<(), BoardError> {
        self.state.grid.set(row, col, value)?;
        Ok(())
    }

    /// Returns the width and height of the grid.
    pub fn size(&self) -> usize {
        self.state.grid.size()
    }

    /// Returns the score as of the last committed tile.
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Returns the value the next committed tile will have.
    pub fn next_tile_value(&self) -> u32 {
        self.state.next_tile
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Returns the full observable state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the turn phase.
    pub fn phase(&self) -> &TurnPhase {
        &self.state.phase
    }

    /// Direction of the last effective shift, if any.
    pub fn last_direction(&self) -> Option<Direction> {
        self.state.last_direction()
    }

    /// Largest tile on the grid.
    pub fn max_tile(&self) -> u32 {
        self.state.grid.max_tile()
    }

    /// Returns the random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the random source mutably, e.g. to extend a script.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Shifts the grid one step in `direction`.
    ///
    /// Returns [`ShiftOutcome::NoOp`] if no tile can move; the board then
    /// forgets its last direction and nothing is pending. Otherwise the
    /// pre-shift grid is kept for [`Board::undo`] and the moves are
    /// returned. The score is not updated until a tile is committed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ShiftPending`] if the previous shift has been
    /// neither undone nor committed; the board is left untouched.
    #[instrument(skip(self), fields(phase = %self.state.phase))]
    pub fn shift(&mut self, direction: Direction) -> Result<ShiftOutcome, BoardError> {
        if let Err(err) = ShiftContract::pre(&self.state, &direction) {
            warn!(%err, "Shift rejected");
            return Err(err);
        }

        let (grid, moves) = shift_grid(&self.state.grid, direction)?;
        if grid == self.state.grid {
            debug!("No tile can move");
            self.state.phase = TurnPhase::Idle;
            return Ok(ShiftOutcome::NoOp);
        }

        let next = BoardState {
            grid,
            phase: TurnPhase::ShiftPending {
                direction,
                snapshot: self.state.grid.clone(),
            },
            ..self.state.clone()
        };

        #[cfg(debug_assertions)]
        ShiftContract::post(&self.state, &next)?;

        self.state = next;
        info!(move_count = moves.len(), "Shift applied");
        self.audit();
        Ok(ShiftOutcome::Moved(moves))
    }

    /// Reverts the pending shift.
    ///
    /// Returns false, leaving the board untouched, if no shift is pending
    /// (none was made, or it was already undone or committed).
    #[instrument(skip(self), fields(phase = %self.state.phase))]
    pub fn undo(&mut self) -> bool {
        match std::mem::take(&mut self.state.phase) {
            TurnPhase::ShiftPending {
                direction,
                snapshot,
            } => {
                self.state.grid = snapshot;
                self.state.phase = TurnPhase::Resolved {
                    direction,
                    resolution: Resolution::Undone,
                };
                info!(%direction, "Shift undone");
                self.audit();
                true
            }
            phase => {
                debug!("Nothing to undo");
                self.state.phase = phase;
                false
            }
        }
    }

    /// Places the previewed tile after the pending shift.
    ///
    /// The tile appears on an empty cell of the edge opposite the shift.
    /// The score is recomputed from the whole grid and a new next-tile
    /// value is drawn. Returns `Ok(None)`, leaving the board untouched, if
    /// no shift is pending.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NoEmptyEdgeCell`](crate::RuleError::NoEmptyEdgeCell)
    /// if the spawn edge is full, or
    /// [`RuleError::NonCanonicalValue`](crate::RuleError::NonCanonicalValue)
    /// if the grid holds a value no merge can produce. In both cases neither
    /// the board nor its source changes, and the shift stays pending so it can
    /// still be undone.
    #[instrument(skip(self), fields(phase = %self.state.phase))]
    pub fn commit_new_tile(&mut self) -> Result<Option<TilePosition>, BoardError> {
        let direction = match HasPendingShift::check(&self.state) {
            Ok(direction) => direction,
            Err(err) => {
                debug!(%err, "Commit ignored");
                return Ok(None);
            }
        };

        // Scored before any draw; a non-canonical grid fails with the source untouched
        let base_score = total_score(&self.state.grid)?;
        let tile_score = score_for_value(self.state.next_tile)?;

        let Some(position) =
            next_tile_position(&self.state.grid, &mut self.source, Some(direction))?
        else {
            return Ok(None);
        };
        let tile = position.with_value(self.state.next_tile);

        let mut grid = self.state.grid.clone();
        grid.set(tile.row, tile.col, tile.value)?;
        let score = base_score + tile_score;
        let next_tile = next_tile_value(&mut self.source);

        let next = BoardState {
            grid,
            score,
            next_tile,
            phase: TurnPhase::Resolved {
                direction,
                resolution: Resolution::Committed,
            },
        };

        #[cfg(debug_assertions)]
        CommitContract::post(&self.state, &next)?;

        self.state = next;
        info!(%tile, score, next_tile, "Tile committed");
        self.audit();
        Ok(Some(tile))
    }

    /// Returns true if shifting in `direction` would move any tile.
    ///
    /// Does not change the board.
    pub fn can_shift(&self, direction: Direction) -> bool {
        shift_grid(&self.state.grid, direction).is_ok_and(|(grid, _)| grid != self.state.grid)
    }

    /// Directions in which some tile can move.
    #[instrument(skip(self))]
    pub fn available_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_shift(direction))
            .collect()
    }

    /// Returns true if no direction moves any tile.
    pub fn is_over(&self) -> bool {
        self.available_directions().is_empty()
    }

    /// Checks every board invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(&self.state)
    }

    /// Logs invariant violations in debug builds.
    fn audit(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = self.check_invariants()
        {
            for violation in &violations {
                warn!(%violation, "Board invariant violated");
            }
        }
    }
}

impl<S> std::fmt::Display for Board<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.state.grid)?;
        write!(f, "score: {}  next: {}", self.state.score, self.state.next_tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    /// 4x4 board with 1 at (0, 0), 2 at (0, 1) and a previewed 3.
    fn scripted_board() -> Board<ScriptedSource> {
        Board::new(4, ScriptedSource::new([0, 0, 8])).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = scripted_board();
        assert_eq!(board.cell(0, 0), Some(1));
        assert_eq!(board.cell(0, 1), Some(2));
        assert_eq!(board.cell(4, 0), None);
        assert_eq!(board.next_tile_value(), 3);
        assert_eq!(board.score(), 0);
        assert_eq!(board.phase(), &TurnPhase::Idle);
    }

    #[test]
    fn test_shift_left_merges() {
        let mut board = scripted_board();
        let outcome = board.shift(Direction::Left).unwrap();
        let moves = outcome.moves();
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_merge());
        assert_eq!(moves[0].to, crate::Cell::new(0, 0));
        assert_eq!(board.cell(0, 0), Some(3));
        assert_eq!(board.cell(0, 1), Some(0));
        assert_eq!(board.last_direction(), Some(Direction::Left));
        // Score waits for the commit
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_noop_shift_clears_direction() {
        let mut board = scripted_board();
        board.shift(Direction::Left).unwrap();
        assert!(board.undo());
        assert_eq!(board.last_direction(), Some(Direction::Left));

        // Up cannot move anything in row 0
        let outcome = board.shift(Direction::Up).unwrap();
        assert!(outcome.is_noop());
        assert_eq!(board.last_direction(), None);
        assert!(!board.undo());
        assert_eq!(board.commit_new_tile(), Ok(None));
    }

    #[test]
    fn test_shift_while_pending_rejected() {
        let mut board = scripted_board();
        board.shift(Direction::Down).unwrap();
        let grid = board.grid().clone();
        assert_eq!(
            board.shift(Direction::Left),
            Err(BoardError::ShiftPending(Direction::Down))
        );
        assert_eq!(board.grid(), &grid);
        assert!(board.phase().is_pending());
    }

    #[test]
    fn test_commit_places_tile_on_opposite_edge() {
        let mut board = scripted_board();
        board.shift(Direction::Left).unwrap();
        // Spawn draw 2 -> third empty cell of the right edge; then next value draw 9 -> 6
        board.source_mut().push([2, 9]);
        let tile = board.commit_new_tile().unwrap().unwrap();
        assert_eq!(tile, TilePosition::new(2, 3, 3));
        assert_eq!(board.cell(2, 3), Some(3));
        assert_eq!(board.score(), 18);
        assert_eq!(board.next_tile_value(), 6);
        assert_eq!(
            board.phase(),
            &TurnPhase::Resolved {
                direction: Direction::Left,
                resolution: Resolution::Committed,
            }
        );
        assert!(!board.undo());
        assert_eq!(board.commit_new_tile(), Ok(None));
    }

    #[test]
    fn test_commit_after_undo_is_ignored() {
        let mut board = scripted_board();
        board.shift(Direction::Right).unwrap();
        assert!(board.undo());
        assert_eq!(board.commit_new_tile(), Ok(None));
        assert_eq!(board.source().drawn(), 3);
    }

    #[test]
    fn test_full_edge_keeps_shift_pending() {
        let mut board = scripted_board();
        board.shift(Direction::Left).unwrap();
        // A changed line always frees its far cell, so fill the edge by hand
        for row in 0..4 {
            board.set_cell(row, 3, 3).unwrap();
        }
        let before = board.state().clone();
        assert_eq!(
            board.commit_new_tile(),
            Err(BoardError::Rule(crate::RuleError::NoEmptyEdgeCell(
                Direction::Left
            )))
        );
        assert_eq!(board.state(), &before);
        assert!(board.undo());
    }

    #[test]
    fn test_shift_grid_moves_stay_on_grid() {
        let grid = Grid::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![3, 0, 3, 6],
            vec![6, 6, 0, 1],
            vec![2, 0, 12, 0],
        ])
        .unwrap();
        for direction in Direction::ALL {
            let (_, moves) = shift_grid(&grid, direction).unwrap();
            assert!(!moves.is_empty(), "{direction}");
            for mv in moves {
                assert!(mv.from.row < 4 && mv.from.col < 4, "{mv}");
                assert!(mv.to.row < 4 && mv.to.col < 4, "{mv}");
            }
        }
    }

    #[test]
    fn test_non_canonical_grid_commit_draws_nothing() {
        let mut board = scripted_board();
        board.shift(Direction::Left).unwrap();
        board.set_cell(3, 0, 5).unwrap();
        board.source_mut().push([1, 4]);
        let before = board.state().clone();

        assert_eq!(
            board.commit_new_tile(),
            Err(BoardError::Rule(crate::RuleError::NonCanonicalValue(5)))
        );
        assert_eq!(board.state(), &before);
        assert_eq!(board.source().drawn(), 3);
        assert_eq!(board.source().remaining(), 2);
        assert!(board.undo());
    }

    #[test]
    fn test_available_directions() {
        let mut board = scripted_board();
        assert_eq!(
            board.available_directions(),
            vec![Direction::Left, Direction::Right, Direction::Down]
        );
        assert!(!board.is_over());

        let values = [3, 6, 3, 6, 6, 3, 6, 3, 3, 6, 3, 6, 6, 3, 6, 3];
        for (i, value) in values.into_iter().enumerate() {
            board.set_cell(i / 4, i % 4, value).unwrap();
        }
        assert!(board.is_over());
    }
}
