//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and are validated by the engine before anything is applied.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed move: a player claiming a one-based cell number.
///
/// The cell is kept as the raw number the player asked for so that
/// out-of-range requests can be reported rather than made unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Requested cell, 1-9 when valid.
    pub cell: i64,
}

impl Move {
    /// Creates a new move for a one-based cell number.
    pub fn new(player: Player, cell: i64) -> Self {
        Self { player, cell }
    }

    /// Creates a move targeting a known position.
    pub fn at(player: Player, position: Position) -> Self {
        Self::new(player, i64::from(position.cell_number()))
    }

    /// Returns the target position, if the cell number is in range.
    pub fn position(&self) -> Option<Position> {
        Position::from_cell_number(self.cell)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Why a proposed cell was rejected.
///
/// Display strings are the messages shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Input did not parse as an integer.
    #[display("Invalid move character!")]
    NotANumber {
        /// The rejected input.
        input: String,
    },

    /// Cell number outside 1-9.
    #[display("Invalid move number!")]
    OutOfRange {
        /// The rejected cell number.
        cell: i64,
    },

    /// The square already holds a mark.
    #[display("Invalid move; square occupied.")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    /// The move was proposed by the player who is not on turn.
    #[display("It's not {attempted}'s turn")]
    WrongTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player who tried to move.
        attempted: Player,
    },

    /// The cell failed validation.
    #[display("{_0}")]
    #[from]
    InvalidMove(#[error(not(source))] InvalidMove),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
