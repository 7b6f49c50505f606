//! Move generation and the transition function.

use super::super::action::{InvalidMove, InvalidMoveKind, Move};
use super::super::{Board, Square};
use super::turn::player;
use tracing::instrument;

/// Returns every legal move on the board.
///
/// Moves are listed in row-major order, `(0, 0)` first and `(2, 2)` last.
/// Search tie-breaking depends on this order. A full board yields no moves.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> Vec<Move> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .filter_map(|(index, _)| Move::from_index(index))
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidMove`] when `mv` lies outside the grid or targets an
/// occupied square.
#[instrument(level = "trace")]
pub fn result(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    let index = mv
        .index()
        .ok_or_else(|| InvalidMove::new(mv, InvalidMoveKind::OutOfBounds))?;

    if board.squares()[index] != Square::Empty {
        return Err(InvalidMove::new(mv, InvalidMoveKind::Occupied));
    }

    Ok(board.with_square(index, Square::Occupied(player(board))))
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_actions_empty_board_row_major() {
        let moves = actions(&Board::new());
        assert_eq!(moves.len(), 9);
        assert_eq!(moves.first(), Some(&Move::new(0, 0)));
        assert_eq!(moves.get(1), Some(&Move::new(0, 1)));
        assert_eq!(moves.last(), Some(&Move::new(2, 2)));
    }

    #[test]
    fn test_actions_filters_occupied() {
        let board: Board = "X...O....".parse().unwrap();
        let moves = actions(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert!(moves.contains(&Move::new(2, 2)));
    }

    #[test]
    fn test_actions_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(actions(&board).is_empty());
    }

    #[test]
    fn test_result_places_current_player() {
        let board: Board = "X........".parse().unwrap();
        let next = result(&board, Move::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(1, 1), Some(Square::Empty));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = "X........".parse().unwrap();
        let err = result(&board, Move::new(0, 0)).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::Occupied);
        assert_eq!(err.mv, Move::new(0, 0));
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let err = result(&Board::new(), Move::new(0, 3)).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::OutOfBounds);
        let err = result(&Board::new(), Move::new(7, 1)).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::OutOfBounds);
    }
}
