//! Random self-play.

use crate::config::ThreesConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use strictly_threes::{Board, BoardError, Grid, RuleError};
use tracing::{debug, info, instrument};

/// Why a simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// No direction moves any tile.
    #[display("no direction moves any tile")]
    NoMoves,
    /// The spawn edge was full, so the last shift was undone.
    #[display("spawn edge full")]
    EdgeFull,
    /// The configured turn limit was reached.
    #[display("turn limit reached")]
    TurnLimit,
}

/// Result of a simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    /// Seed the game was played with.
    pub seed: u64,
    /// Committed turns.
    pub turns: usize,
    /// Final score.
    pub score: u64,
    /// Largest tile on the final grid.
    pub max_tile: u32,
    /// Tile the next commit would have placed.
    pub next_tile: u32,
    /// Why play stopped.
    pub stop_reason: StopReason,
    /// Final grid.
    pub grid: Grid,
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "seed {}: stopped after {} turns ({})", self.seed, self.turns, self.stop_reason)?;
        writeln!(f, "{}", self.grid)?;
        write!(
            f,
            "score: {}  max tile: {}  next: {}",
            self.score, self.max_tile, self.next_tile
        )
    }
}

/// Plays uniformly random available directions, committing after each shift.
///
/// Without a configured seed one is drawn and reported in the summary, so
/// every run can be reproduced.
#[instrument(skip(config), fields(size = config.size(), max_turns = config.max_turns()))]
pub fn simulate(config: &ThreesConfig) -> Result<SimulationSummary, BoardError> {
    let seed = config.seed().unwrap_or_else(rand::random);
    let mut board = Board::seeded(*config.size(), seed)?;
    // Directions draw from their own generator; tiles come from the board's source
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    let mut turns = 0;
    let stop_reason = loop {
        if turns >= *config.max_turns() {
            break StopReason::TurnLimit;
        }
        let directions = board.available_directions();
        if directions.is_empty() {
            break StopReason::NoMoves;
        }
        let direction = directions[rng.random_range(0..directions.len())];
        board.shift(direction)?;
        match board.commit_new_tile() {
            Ok(tile) => {
                debug!(turn = turns, %direction, ?tile, "Turn played");
                turns += 1;
            }
            Err(BoardError::Rule(RuleError::NoEmptyEdgeCell(_))) => {
                board.undo();
                break StopReason::EdgeFull;
            }
            Err(err) => return Err(err),
        }
    };

    info!(seed, turns, score = board.score(), %stop_reason, "Simulation finished");
    Ok(SimulationSummary {
        seed,
        turns,
        score: board.score(),
        max_tile: board.max_tile(),
        next_tile: board.next_tile_value(),
        stop_reason,
        grid: board.grid().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_threes::rules::total_score;

    fn config(size: usize, seed: u64, max_turns: usize) -> ThreesConfig {
        ThreesConfig::default().with_overrides(Some(size), Some(seed), Some(max_turns))
    }

    #[test]
    fn test_same_seed_same_summary() {
        let first = simulate(&config(4, 12, 50)).unwrap();
        let second = simulate(&config(4, 12, 50)).unwrap();
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.score, second.score);
        assert_eq!(first.turns, second.turns);
    }

    #[test]
    fn test_zero_turn_limit() {
        let summary = simulate(&config(4, 1, 0)).unwrap();
        assert_eq!(summary.turns, 0);
        assert_eq!(summary.stop_reason, StopReason::TurnLimit);
        assert_eq!(summary.grid.occupied(), 2);
    }

    #[test]
    fn test_summary_is_consistent() {
        let summary = simulate(&config(3, 8, 200)).unwrap();
        assert!(summary.turns <= 200);
        assert!(summary.grid.occupied() >= 2);
        assert_eq!(total_score(&summary.grid), Ok(summary.score));
        assert_eq!(summary.grid.max_tile(), summary.max_tile);
        if summary.stop_reason == StopReason::NoMoves {
            assert_eq!(summary.grid.occupied(), 9);
        }
    }

    #[test]
    fn test_invalid_size_is_error() {
        assert!(simulate(&config(0, 1, 10)).is_err());
    }

    #[test]
    fn test_json_summary() {
        let summary = simulate(&config(4, 2, 5)).unwrap();
        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 2);
        assert_eq!(json["turns"], 5);
        assert_eq!(json["stop_reason"], "turn_limit");
        assert_eq!(json["grid"].as_array().map(Vec::len), Some(4));
    }
}
