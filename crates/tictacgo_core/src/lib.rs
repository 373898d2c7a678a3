//! Pure tic-tac-toe game logic for TicTacGo.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board and turn flag and applies moves
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Validation**: [`MoveValidator`] turns raw input into a free [`Position`]
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictacgo_core::{GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::new();
//! for cell in ["5", "1", "3", "9", "7"] {
//!     engine.play_input(cell)?;
//! }
//! assert_eq!(engine.status(), GameStatus::XWins);
//! # Ok::<(), tictacgo_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod validate;

pub use action::{InvalidMove, Move, MoveError};
pub use engine::{GameEngine, PlayersTurn};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
pub use validate::{CellInRange, CellIsEmpty, MoveValidator};
