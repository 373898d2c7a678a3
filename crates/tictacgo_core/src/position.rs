//! Board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Players address cells 1-9 in reading order; internally the board
/// stores them at indices 0-8.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Converts position to the one-based cell number shown to players.
    pub fn cell_number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a one-based cell number (1-9).
    pub fn from_cell_number(cell: i64) -> Option<Self> {
        let index = usize::try_from(cell.checked_sub(1)?).ok()?;
        Self::from_index(index)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.cell_number())
    }
}
