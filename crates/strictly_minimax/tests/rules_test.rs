//! Rule properties checked over every reachable tic-tac-toe position.

mod common;

use common::reachable_boards;
use strictly_minimax::{
    Board, InvalidMoveKind, Move, Player, Square, actions, initial_state, player, result,
    terminal, utility, winner,
};

#[test]
fn test_reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_first_player_is_x() {
    assert_eq!(player(&initial_state()), Player::X);
}

#[test]
fn test_result_changes_exactly_one_square() {
    for board in reachable_boards() {
        let to_move = player(&board);
        for mv in actions(&board) {
            let next = result(&board, mv).unwrap();
            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.squares()[i] != next.squares()[i])
                .collect();
            assert_eq!(changed, vec![mv.index().unwrap()], "board {}", board.to_notation());
            assert_eq!(next.get(mv.row, mv.col), Some(Square::Occupied(to_move)));
        }
    }
}

#[test]
fn test_result_rejects_illegal_moves() {
    for board in reachable_boards() {
        let legal = actions(&board);
        for row in 0..4 {
            for col in 0..4 {
                let mv = Move::new(row, col);
                if legal.contains(&mv) {
                    continue;
                }
                let err = result(&board, mv).unwrap_err();
                let expected = if row < 3 && col < 3 {
                    InvalidMoveKind::Occupied
                } else {
                    InvalidMoveKind::OutOfBounds
                };
                assert_eq!(err.kind, expected);
                assert_eq!(err.mv, mv);
            }
        }
    }
}

#[test]
fn test_queries_are_repeatable() {
    for board in reachable_boards() {
        assert_eq!(winner(&board), winner(&board));
        assert_eq!(terminal(&board), terminal(&board));
        assert_eq!(actions(&board), actions(&board));
    }
}

#[test]
fn test_terminal_iff_winner_or_no_actions() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        assert_eq!(terminal(&board), expected, "board {}", board.to_notation());
    }
}

#[test]
fn test_turn_alternates() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1);
        let expected = if x > o { Player::O } else { Player::X };
        assert_eq!(player(&board), expected);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert!(actions(&board).is_empty());
}
