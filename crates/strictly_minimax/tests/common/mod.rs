//! Shared helpers for integration tests.

use std::collections::HashSet;
use strictly_minimax::{Board, actions, initial_state, result, terminal};

/// Every board reachable from the empty board by alternating play.
#[allow(dead_code)]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if terminal(&board) {
            continue;
        }
        for mv in actions(&board) {
            stack.push(result(&board, mv).unwrap());
        }
    }

    boards
}
