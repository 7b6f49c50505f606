//! Command-line interface for strictly_minimax.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use strictly_minimax::Board;

/// Strictly Minimax - optimal tic-tac-toe by exhaustive search
///
/// Boards are nine symbols in row-major order: `X`, `O`, and `.` for empty,
/// optionally split into rows with `/` (e.g. `XX./OO./...`).
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board to solve
        board: Board,
    },

    /// Print the value of every legal move
    Analyze {
        /// Board to analyze
        board: Board,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,
    },
}
