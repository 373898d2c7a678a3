//! Balanced marks invariant: X has as many marks as O, or one more.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: X moves first and turns alternate, so the mark counts
/// never drift apart.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
