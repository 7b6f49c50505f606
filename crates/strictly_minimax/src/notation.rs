//! Text notation for boards.
//!
//! The compact form is nine symbols in row-major order, e.g. `XO.X.O...`.
//! `X` and `O` (either case) are marks; `.`, `-`, `_` and the digits `1`-`9`
//! are empty squares. Whitespace, `|` and `/` are ignored, so the output of
//! [`Board`]'s `Display` impl and forms like `"xo./.x./..o"` parse too.

use super::types::{Board, Player, Square};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(player) => player.mark(),
    }
}

impl Board {
    /// Formats the board as nine symbols in row-major order.
    pub fn to_notation(&self) -> String {
        self.squares().iter().copied().map(symbol).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares().chunks(Board::SIZE).enumerate() {
            let line: Vec<String> = cells.iter().map(|s| symbol(*s).to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if row < Board::SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        // Separator rows of the rendered form ("-+-+-") hold no squares.
        let cells = s
            .lines()
            .filter(|line| {
                let line = line.trim();
                !(line.contains('+') && line.chars().all(|c| c == '-' || c == '+'))
            })
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/');

        for c in cells {
            let square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | '1'..='9' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected symbol {:?}",
                        other
                    )));
                }
            };
            if count == Board::CELLS {
                return Err(BoardParseError::new(format!(
                    "expected {} squares, found more",
                    Board::CELLS
                )));
            }
            squares[count] = square;
            count += 1;
        }

        if count != Board::CELLS {
            return Err(BoardParseError::new(format!(
                "expected {} squares, found {}",
                Board::CELLS,
                count
            )));
        }

        Ok(Board::from_squares(squares))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_parse_separated_lowercase() {
        let board: Board = "xo./.x./..o".parse().unwrap();
        assert_eq!(board.to_notation(), "XO..X...O");
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO.X.O..X".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|O|.\n-+-+-\nX|.|O\n-+-+-\n.|.|X");
        assert_eq!(rendered.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_dashes_as_empty() {
        let board: Board = "---------".parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_too_few() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert!(err.message.contains("found 2"));
    }

    #[test]
    fn test_parse_too_many() {
        assert!("XO........".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = "XO..Z....".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'Z'"));
    }
}
