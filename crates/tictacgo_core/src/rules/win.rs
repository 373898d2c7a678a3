//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds all three squares of any line.
#[instrument(skip(board))]
pub fn has_triple(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. X is checked first; on boards reachable through
/// legal play at most one player can hold a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_triple(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_code(mut code: u32) -> Board {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    }

    /// Independent check by row/column arithmetic.
    fn reference_triple(board: &Board, player: Player) -> bool {
        let at = |row: usize, col: usize| {
            board.squares()[row * 3 + col] == Square::Occupied(player)
        };
        let row = (0..3).any(|r| (0..3).all(|c| at(r, c)));
        let col = (0..3).any(|c| (0..3).all(|r| at(r, c)));
        let diag = (0..3).all(|i| at(i, i));
        let anti = (0..3).all(|i| at(i, 2 - i));
        row || col || diag || anti
    }

    #[test]
    fn test_has_triple_matches_reference_on_all_boards() {
        for code in 0..3u32.pow(9) {
            let board = board_from_code(code);
            for player in [Player::X, Player::O] {
                assert_eq!(
                    has_triple(&board, player),
                    reference_triple(&board, player),
                    "board {code}:\n{board}"
                );
            }
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(!has_triple(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
