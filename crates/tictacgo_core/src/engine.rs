//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board and the turn flag and is the only thing
//! that mutates them. Every move is validated in full before any state
//! changes, so a rejected move leaves the engine exactly as it was.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::rules;
use super::validate::MoveValidator;
use super::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Precondition: it must be the proposing player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not on turn.
    #[instrument(skip(engine))]
    pub fn check(action: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if action.player == engine.to_move {
            Ok(())
        } else {
            Err(MoveError::WrongTurn {
                expected: engine.to_move,
                attempted: action.player,
            })
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Only built through [`GameEngine::new`] or [`GameEngine::replay`], so the
/// board and history always come from applied moves. It is deliberately not
/// deserializable:
///
/// ```compile_fail
/// fn from_wire<T: serde::de::DeserializeOwned>() {}
/// from_wire::<tictacgo_core::GameEngine>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions that are still free.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies a move and returns the resulting status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has a terminal status.
    /// - [`MoveError::WrongTurn`] if `action.player` is not on turn.
    /// - [`MoveError::InvalidMove`] if the cell is out of range or taken.
    #[instrument(skip(self), fields(to_move = %self.to_move, status = %self.status))]
    pub fn apply_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            debug!("Move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        PlayersTurn::check(&action, self)?;
        let position = MoveValidator::check_cell(action.cell, &self.board)?;

        self.board.set(position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();
        self.status = rules::evaluate(&self.board);

        assert_invariants(self);

        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game finished");
        } else {
            debug!(%position, next = %self.to_move, "Move applied");
        }
        Ok(self.status)
    }

    /// Validates a line of raw input as a move for the player on turn and
    /// applies it.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], plus
    /// [`InvalidMove::NotANumber`](super::InvalidMove::NotANumber) for input
    /// that is not an integer.
    #[instrument(skip(self))]
    pub fn play_input(&mut self, input: &str) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let position = MoveValidator::parse(input, &self.board)?;
        self.apply_move(Move::at(self.to_move, position))
    }

    /// Rebuilds a game by applying moves from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for action in moves {
            engine.apply_move(*action)?;
        }
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
