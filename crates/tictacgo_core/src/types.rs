//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Renders the board with custom marker symbols.
    ///
    /// Rows are joined by newlines and cells by `" | "`. Empty squares show
    /// their one-based cell number.
    pub fn render(&self, x_symbol: &str, o_symbol: &str) -> String {
        self.squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(Player::X) => x_symbol.to_string(),
                        Square::Occupied(Player::O) => o_symbol.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render("X", "O"))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// X has three in a row.
    #[display("X wins")]
    XWins,
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// Board is full and nobody won.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Winning status for the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// True once the game has reached a terminal status.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_renders_cell_numbers() {
        assert_eq!(Board::new().to_string(), "1 | 2 | 3\n4 | 5 | 6\n7 | 8 | 9");
    }

    #[test]
    fn test_render_substitutes_markers() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "X | 2 | 3\n4 | O | 6\n7 | 8 | 9");
        assert_eq!(board.render("#", "@"), "# | 2 | 3\n4 | @ | 6\n7 | 8 | 9");
    }

    #[test]
    fn test_count_marks() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::won_by(Player::O), GameStatus::OWins);
        assert_eq!(GameStatus::XWins.winner(), Some(Player::X));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
    }
}
