//! Shared board handle for multi-caller use.
//!
//! Board operations are not designed to interleave, so the whole board
//! sits behind one mutex and every operation holds it to completion.

use super::action::ShiftOutcome;
use super::board::Board;
use super::direction::Direction;
use super::error::BoardError;
use super::source::{SeededSource, TileSource};
use super::state::BoardState;
use super::types::TilePosition;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// Clonable handle to a board guarded by a single lock.
#[derive(Debug)]
pub struct SharedBoard<S = SeededSource> {
    inner: Arc<Mutex<Board<S>>>,
}

impl<S> Clone for SharedBoard<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TileSource> SharedBoard<S> {
    /// Wraps a board.
    #[instrument(skip(board))]
    pub fn new(board: Board<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Shifts the board. See [`Board::shift`].
    #[instrument(skip(self))]
    pub fn shift(&self, direction: Direction) -> Result<ShiftOutcome, BoardError> {
        self.lock().shift(direction)
    }

    /// Reverts the pending shift. See [`Board::undo`].
    #[instrument(skip(self))]
    pub fn undo(&self) -> bool {
        self.lock().undo()
    }

    /// Places the previewed tile. See [`Board::commit_new_tile`].
    #[instrument(skip(self))]
    pub fn commit_new_tile(&self) -> Result<Option<TilePosition>, BoardError> {
        self.lock().commit_new_tile()
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> BoardState {
        self.lock().state().clone()
    }

    /// Runs `f` with exclusive access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&mut Board<S>) -> R) -> R {
        f(&mut self.lock())
    }

    // Operations swap in a complete state, so a poisoned board is still consistent.
    fn lock(&self) -> MutexGuard<'_, Board<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_board() {
        let shared = SharedBoard::new(Board::seeded(4, 7).unwrap());
        let other = shared.clone();
        let direction = shared.with(|board| board.available_directions()[0]);

        assert!(matches!(other.shift(direction), Ok(ShiftOutcome::Moved(_))));
        assert!(shared.state().phase().is_pending());
        assert!(shared.undo());
        assert!(!other.undo());
    }

    #[test]
    fn test_concurrent_turns_stay_consistent() {
        let shared = SharedBoard::new(Board::seeded(4, 11).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        shared.with(|board| {
                            if let Some(&direction) = board.available_directions().first() {
                                board.shift(direction).unwrap();
                                board.commit_new_tile().unwrap();
                            }
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(shared.with(|board| board.check_invariants().is_ok()));
    }
}
