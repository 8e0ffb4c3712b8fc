//! Mark count invariant: the board holds exactly `moves` marks.

use super::Invariant;
use crate::GameState;
use crate::rules::tie::MAX_MOVES;

/// Invariant: exactly `moves` cells are non-empty, and `moves <= 9`.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.moves() <= MAX_MOVES && state.board().filled() == state.moves()
    }

    fn description() -> &'static str {
        "Board holds exactly one mark per move"
    }
}
