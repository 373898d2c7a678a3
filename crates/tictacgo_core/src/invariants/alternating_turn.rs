//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move
/// is X exactly when an even number of moves has been made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
