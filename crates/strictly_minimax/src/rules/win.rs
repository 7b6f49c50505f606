//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// Winning lines as `(row, col)` triples: rows, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in row, column, diagonal
/// order) holding three of the same mark, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a.0, a.1);
        if sq != Some(Square::Empty) && sq == board.get(b.0, b.1) && sq == board.get(c.0, c.1) {
            return sq.and_then(Square::player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XOXXO..O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX.XO.X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX.X.XO.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
