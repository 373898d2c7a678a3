//! History consistency invariant: every move in history is on the board.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: History length equals number of occupied squares, and
/// each recorded move's square holds that move's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let occupied = engine
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        engine.history().len() == occupied
            && engine.history().iter().all(|m| {
                m.position()
                    .is_some_and(|pos| engine.board().get(pos) == Square::Occupied(m.player))
            })
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_single_move_holds() {
        let engine = GameEngine::replay(&[Move::new(Player::X, 5)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_unrecorded_square_violates() {
        let mut engine = GameEngine::replay(&[Move::new(Player::X, 5)]).unwrap();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::replay(&[Move::new(Player::X, 5)]).unwrap();
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
