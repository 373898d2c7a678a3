//! Move validation for raw player input.
//!
//! Checks run in order: the input must be a number, the number must
//! name a cell, and the cell must be free. The occupancy check only
//! runs once the number is known to be in range.

use super::action::InvalidMove;
use super::{Board, Position};
use tracing::{debug, instrument};

/// Precondition: the cell number names one of the nine squares.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the cell number to a position.
    #[instrument]
    pub fn check(cell: i64) -> Result<Position, InvalidMove> {
        Position::from_cell_number(cell).ok_or(InvalidMove::OutOfRange { cell })
    }
}

/// Precondition: the square at the position is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects positions that already hold a mark.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), InvalidMove> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(InvalidMove::CellOccupied { position })
        }
    }
}

/// Validates proposed moves against the board.
pub struct MoveValidator;

impl MoveValidator {
    /// Validates a numeric cell: in range first, then free.
    #[instrument(skip(board))]
    pub fn check_cell(cell: i64, board: &Board) -> Result<Position, InvalidMove> {
        let position = CellInRange::check(cell)?;
        CellIsEmpty::check(position, board)?;
        Ok(position)
    }

    /// Parses a line of player input into a free position.
    ///
    /// Surrounding whitespace is ignored.
    #[instrument(skip(board))]
    pub fn parse(input: &str, board: &Board) -> Result<Position, InvalidMove> {
        let trimmed = input.trim();
        let cell: i64 = trimmed.parse().map_err(|_| {
            debug!(input = trimmed, "Input is not a number");
            InvalidMove::NotANumber {
                input: trimmed.to_string(),
            }
        })?;
        Self::check_cell(cell, board)
    }
}
