//! Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], a 3x3 `Copy` value of [`Square`]s
//! - **Rules**: [`player`], [`actions`], [`result`], [`winner`], [`terminal`],
//!   [`utility`], [`outcome`]
//! - **Search**: [`minimax`] plus the reporting variants [`search`],
//!   [`evaluate`] and [`analyze`]
//!
//! Every function is pure. Boards are never mutated in place; [`result`]
//! returns a new board and leaves its input untouched.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! # fn main() -> Result<(), strictly_minimax::InvalidMove> {
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     if let Some(mv) = minimax(&board) {
//!         board = result(&board, mv)?;
//!     }
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod notation;
mod rules;
mod search;
mod types;

use tracing::instrument;

// Crate-level exports - Board state
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - Moves and errors
pub use action::{InvalidMove, InvalidMoveKind, Move};
pub use notation::BoardParseError;

// Crate-level exports - Rules
pub use rules::{actions, is_draw, is_full, outcome, player, result, terminal, utility, winner};

// Crate-level exports - Search
pub use search::{Objective, ScoredMove, SearchReport, analyze, evaluate, minimax, search};

/// Returns the starting state of the board: nine empty squares.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}
