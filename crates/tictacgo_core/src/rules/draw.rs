//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::win::has_triple;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board where neither player holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_triple(board, Player::X) && !has_triple(board, Player::O)
}
