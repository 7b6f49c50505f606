//! Moves and the error raised when a move cannot be applied.

use super::types::Board;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: the `(row, col)` of the square to mark.
///
/// Coordinates are unchecked. A move is only legal relative to a board,
/// see [`crate::actions`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major board index, or `None` when out of range.
    pub fn index(&self) -> Option<usize> {
        Board::index_of(self.row, self.col)
    }

    /// Creates the move addressing a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::CELLS).then(|| Self::new(index / Board::SIZE, index % Board::SIZE))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveKind {
    /// The coordinates fall outside the 3x3 grid.
    #[display("out of bounds")]
    OutOfBounds,
    /// The square is already occupied.
    #[display("square already occupied")]
    Occupied,
}

/// A move that is not among the legal actions of the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {}: {} at {}:{}", mv, kind, file, line)]
pub struct InvalidMove {
    /// The rejected move.
    pub mv: Move,
    /// Why it was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new invalid-move error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(mv: Move, kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            mv,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
