//! Terminal detection and scoring.

use super::super::{Board, Outcome, Player};
use super::draw::is_full;
use super::win::winner;
use tracing::instrument;

/// Returns `true` if the game is over: somebody won or the board is full.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's perspective.
///
/// X win is `1`, O win is `-1`, anything else is `0`. Only meaningful once
/// [`terminal`] holds; a non-terminal board scores `0`.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
