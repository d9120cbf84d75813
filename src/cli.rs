//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe where every view is derived from the turn history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe_history.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal UI
    Tui,

    /// Apply a list of moves and print the resulting game
    Play {
        /// Moves in play order: `row,col` (1-3), a cell number (1-9) or a label
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Display name for X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O
        #[arg(long)]
        o_name: Option<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}
