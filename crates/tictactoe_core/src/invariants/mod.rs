//! First-class invariants for the board/turn state.
//!
//! Invariants are logical properties that must hold between turns. They are
//! testable on their own and are verified after every move in debug builds.

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

pub mod alternating_turn;
pub mod history_consistent;
pub mod mark_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use mark_count::MarkCountInvariant;

/// Checks every invariant, logging violations.
pub fn verify(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    let checks: [(fn(&GameState) -> bool, &'static str); 3] = [
        (MarkCountInvariant::holds, MarkCountInvariant::description()),
        (
            AlternatingTurnInvariant::holds,
            AlternatingTurnInvariant::description(),
        ),
        (
            HistoryConsistentInvariant::holds,
            HistoryConsistentInvariant::description(),
        ),
    ];

    let violations: Vec<_> = checks
        .into_iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| {
            tracing::warn!(description, "Invariant violated");
            InvariantViolation::new(description)
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
