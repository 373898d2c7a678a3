//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every applied
//! move. The engine checks them in debug builds; they are also testable
//! on their own.

pub mod alternating_turn;
pub mod balanced_marks;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;

use super::GameEngine;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BalancedMarksInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(%violation, "Engine invariant violated");
        }
        panic!("engine invariants violated: {violations:?}");
    }
}
