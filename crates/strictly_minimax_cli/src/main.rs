//! Strictly Minimax - command-line driver
//!
//! Solves tic-tac-toe positions with the `strictly_minimax` engine.

#![warn(missing_docs)]

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use strictly_minimax::initial_state;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_format(cli.format);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::BestMove { board } => commands::best_move(&board, &config, &mut stdout),
        Command::Analyze { board } => commands::analyze_moves(&board, &config, &mut stdout),
        Command::SelfPlay { board } => {
            let start = board.unwrap_or_else(initial_state);
            commands::self_play(&start, &config, &mut stdout)
        }
    }
}
