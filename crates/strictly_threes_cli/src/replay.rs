//! Scripted play: shifts, undos and commits read from a move list.

use std::str::FromStr;
use strictly_threes::{Board, BoardError, Direction, ShiftOutcome, TilePosition, TileSource};
use tracing::{info, instrument, warn};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Step {
    /// Shift in a direction.
    #[display("{}", _0)]
    Shift(Direction),
    /// Place the previewed tile.
    #[display("commit")]
    Commit,
    /// Revert the pending shift.
    #[display("undo")]
    Undo,
}

impl FromStr for Step {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("commit") || s.eq_ignore_ascii_case("c") {
            return Ok(Step::Commit);
        }
        if s.eq_ignore_ascii_case("undo") {
            return Ok(Step::Undo);
        }
        Direction::from_str(s)
            .map(Step::Shift)
            .map_err(|_| ReplayError::UnknownStep(s.to_string()))
    }
}

/// Parses a comma- or whitespace-separated step list.
#[instrument]
pub fn parse_steps(script: &str) -> Result<Vec<Step>, ReplayError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(Step::from_str)
        .collect()
}

/// What a step did to the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StepOutcome {
    /// The shift moved this many tiles.
    #[display("{} tile(s) moved", _0)]
    Moved(usize),
    /// The shift moved nothing.
    #[display("nothing moved")]
    NoOp,
    /// The pending shift was reverted.
    #[display("undone")]
    Undone,
    /// There was no pending shift to revert.
    #[display("nothing to undo")]
    NothingToUndo,
    /// A tile was placed.
    #[display("placed {}", _0)]
    Committed(TilePosition),
    /// There was no pending shift to commit.
    #[display("nothing to commit")]
    NothingToCommit,
}

/// A step and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based position in the script.
    pub number: usize,
    /// The step applied.
    pub step: Step,
    /// What happened.
    pub outcome: StepOutcome,
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>3}. {:<6} {}", self.number, self.step.to_string(), self.outcome)
    }
}

/// Error raised while replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A token is neither a direction nor `commit` / `undo`.
    #[display("Unknown step '{}'", _0)]
    UnknownStep(String),

    /// The board rejected a step.
    #[display("Step {} ({}) rejected: {}", number, step, source)]
    Rejected {
        /// 1-based position in the script.
        number: usize,
        /// The rejected step.
        step: Step,
        /// The board's error.
        source: BoardError,
    },
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Rejected { source, .. } => Some(source),
            ReplayError::UnknownStep(_) => None,
        }
    }
}

/// Applies `steps` in order.
///
/// With `auto_commit`, every shift that moves a tile is followed by a
/// commit, reported as its own step. The first rejected step aborts the
/// replay.
#[instrument(skip(board, steps), fields(step_count = steps.len()))]
pub fn replay<S: TileSource>(
    board: &mut Board<S>,
    steps: &[Step],
    auto_commit: bool,
) -> Result<Vec<StepReport>, ReplayError> {
    let mut reports = Vec::new();

    for (i, &step) in steps.iter().enumerate() {
        let number = i + 1;
        let outcome = apply(board, step).map_err(|source| {
            warn!(number, %step, %source, "Replay aborted");
            ReplayError::Rejected {
                number,
                step,
                source,
            }
        })?;
        let moved = matches!(outcome, StepOutcome::Moved(_));
        reports.push(StepReport {
            number,
            step,
            outcome,
        });

        if auto_commit && moved {
            let outcome = apply(board, Step::Commit).map_err(|source| ReplayError::Rejected {
                number,
                step: Step::Commit,
                source,
            })?;
            reports.push(StepReport {
                number,
                step: Step::Commit,
                outcome,
            });
        }
    }

    info!(score = board.score(), "Replay finished");
    Ok(reports)
}

fn apply<S: TileSource>(board: &mut Board<S>, step: Step) -> Result<StepOutcome, BoardError> {
    Ok(match step {
        Step::Shift(direction) => match board.shift(direction)? {
            ShiftOutcome::Moved(moves) => StepOutcome::Moved(moves.len()),
            ShiftOutcome::NoOp => StepOutcome::NoOp,
        },
        Step::Undo => {
            if board.undo() {
                StepOutcome::Undone
            } else {
                StepOutcome::NothingToUndo
            }
        }
        Step::Commit => match board.commit_new_tile()? {
            Some(tile) => StepOutcome::Committed(tile),
            None => StepOutcome::NothingToCommit,
        },
    })
}
