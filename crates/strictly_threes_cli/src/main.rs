//! Threes - command-line driver
//!
//! Simulates random games and replays scripted move lists against the
//! `strictly_threes` board.

#![warn(missing_docs)]

mod cli;
mod config;
mod replay;
mod simulate;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::ThreesConfig;
use std::path::PathBuf;
use strictly_threes::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            config,
            size,
            seed,
            max_turns,
            json,
        } => run_simulate(config, size, seed, max_turns, json),
        Command::Replay {
            moves,
            size,
            seed,
            auto_commit,
        } => run_replay(&moves, size, seed, auto_commit),
    }
}

/// Run a random self-play game and print its summary
#[instrument]
fn run_simulate(
    config: Option<PathBuf>,
    size: Option<usize>,
    seed: Option<u64>,
    max_turns: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => ThreesConfig::from_file(path)?,
        None => ThreesConfig::default(),
    }
    .with_overrides(size, seed, max_turns);
    info!(?config, "Starting simulation");

    let summary = simulate::simulate(&config).context("Simulation failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

/// Replay a scripted move list and print each step and the final board
#[instrument]
fn run_replay(moves: &str, size: usize, seed: Option<u64>, auto_commit: bool) -> Result<()> {
    let steps = replay::parse_steps(moves)?;
    let mut board = match seed {
        Some(seed) => Board::seeded(size, seed)?,
        None => Board::from_entropy(size)?,
    };
    println!("{}\n", board);

    let reports = replay::replay(&mut board, &steps, auto_commit)?;
    for report in &reports {
        println!("{}", report);
    }
    println!("\n{}", board);
    Ok(())
}
