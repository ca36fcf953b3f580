//! Command-line interface for the tic-tac-toe harness.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - drive the game core from a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or replay tic-tac-toe games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print snapshots as JSON instead of a text grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one cell per line ('r' resets, 'q' quits)
    Play,

    /// Apply 0-based cell indices in order and print the final state
    Replay {
        /// Cell indices, e.g. `0 3 1 4 2`
        #[arg(allow_negative_numbers = true)]
        moves: Vec<i64>,
    },
}
