//! Command runners. Each writes its report to the given writer.

use crate::config::{CliConfig, OutputFormat};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use strictly_minimax::{
    Board, Move, Outcome, Player, ScoredMove, analyze, minimax, outcome, player, result, search,
    terminal,
};
use tracing::{info, instrument};

/// Report for `best-move`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    to_move: Option<Player>,
    outcome: Outcome,
    best: Option<Move>,
    value: i8,
    nodes: u64,
    next: Option<String>,
}

/// Report for `analyze`.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    board: String,
    to_move: Option<Player>,
    moves: Vec<ScoredMove>,
}

/// One ply of a self-play game.
#[derive(Debug, Serialize)]
struct Ply {
    number: usize,
    player: Player,
    mv: Move,
    board: String,
    #[serde(skip)]
    after: Board,
}

/// Report for `self-play`.
#[derive(Debug, Serialize)]
struct SelfPlayReport {
    start: String,
    plies: Vec<Ply>,
    outcome: Outcome,
}

/// Side to move, or `None` once the game is over.
fn side_to_move(board: &Board) -> Option<Player> {
    (!terminal(board)).then(|| player(board))
}

fn write_json(out: &mut impl Write, report: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to encode report")?;
    writeln!(out)?;
    Ok(())
}

/// Prints the optimal move for `board`.
#[instrument(skip(config, out))]
pub fn best_move(board: &Board, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let report = search(board);
    let next = match report.best {
        Some(mv) => Some(result(board, mv).context("Search chose an illegal move")?),
        None => None,
    };
    info!(best = ?report.best, value = report.value, "Best move computed");

    if *config.format() == OutputFormat::Json {
        return write_json(
            out,
            &BestMoveReport {
                board: board.to_notation(),
                to_move: side_to_move(board),
                outcome: outcome(board),
                best: report.best,
                value: report.value,
                nodes: report.nodes,
                next: next.map(|b| b.to_notation()),
            },
        );
    }

    if *config.show_board() {
        writeln!(out, "{}\n", board)?;
    }
    match (report.best, next) {
        (Some(mv), Some(next)) => {
            writeln!(out, "To move: {}", player(board))?;
            writeln!(out, "Best move: {}", mv)?;
            writeln!(out, "Value: {} ({} positions searched)", report.value, report.nodes)?;
            if *config.show_board() {
                writeln!(out, "\n{}", next)?;
            }
        }
        _ => writeln!(out, "Game over: {}", outcome(board))?,
    }
    Ok(())
}

/// Prints every legal move of `board` with its value.
#[instrument(skip(config, out))]
pub fn analyze_moves(board: &Board, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let moves = analyze(board);

    if *config.format() == OutputFormat::Json {
        return write_json(
            out,
            &AnalysisReport {
                board: board.to_notation(),
                to_move: side_to_move(board),
                moves,
            },
        );
    }

    if *config.show_board() {
        writeln!(out, "{}\n", board)?;
    }
    if moves.is_empty() {
        writeln!(out, "Game over: {}", outcome(board))?;
        return Ok(());
    }
    writeln!(out, "To move: {}", player(board))?;
    for scored in &moves {
        writeln!(out, "{} -> {}", scored.mv, scored.value)?;
    }
    Ok(())
}

/// Plays minimax against itself from `start` until the game ends.
#[instrument(skip(config, out))]
pub fn self_play(start: &Board, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let mut board = *start;
    let mut plies = Vec::new();

    while let Some(mv) = minimax(&board) {
        let mover = player(&board);
        board = result(&board, mv).context("Search chose an illegal move")?;
        plies.push(Ply {
            number: plies.len() + 1,
            player: mover,
            mv,
            board: board.to_notation(),
            after: board,
        });
    }

    let final_outcome = outcome(&board);
    info!(plies = plies.len(), outcome = %final_outcome, "Self-play finished");

    if *config.format() == OutputFormat::Json {
        return write_json(
            out,
            &SelfPlayReport {
                start: start.to_notation(),
                plies,
                outcome: final_outcome,
            },
        );
    }

    for ply in &plies {
        writeln!(out, "{}. {} plays {}", ply.number, ply.player, ply.mv)?;
        if *config.show_board() {
            writeln!(out, "{}\n", ply.after)?;
        }
    }
    writeln!(out, "Outcome: {}", final_outcome)?;
    Ok(())
}
