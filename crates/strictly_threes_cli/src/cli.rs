//! Command-line interface for the `threes` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Threes - simulate and replay sliding-tile puzzle games
#[derive(Parser, Debug)]
#[command(name = "threes")]
#[command(about = "Simulate and replay Threes games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play random moves until the game ends or the turn limit is hit
    Simulate {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid size (overrides the config file)
        #[arg(long)]
        size: Option<usize>,

        /// Random seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of committed turns (overrides the config file)
        #[arg(long)]
        max_turns: Option<usize>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a scripted sequence of shifts, undos and commits
    Replay {
        /// Comma-separated steps, e.g. "left,commit,up,undo"
        #[arg(short, long)]
        moves: String,

        /// Grid size
        #[arg(long, default_value = "4")]
        size: usize,

        /// Random seed for tile draws
        #[arg(long)]
        seed: Option<u64>,

        /// Commit a tile after every shift that moves something
        #[arg(long)]
        auto_commit: bool,
    },
}
