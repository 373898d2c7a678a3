//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the validator can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_triple};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// Wins are checked before the draw, since the winning move can also
/// fill the last empty square.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::won_by(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
