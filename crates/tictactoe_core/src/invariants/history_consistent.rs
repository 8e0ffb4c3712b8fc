//! History consistency: the move log explains the board.

use super::Invariant;
use crate::GameState;
use std::collections::HashSet;

/// Invariant: one history entry per move, no cell played twice, and every
/// recorded move's cell still holds that player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        if history.len() != state.moves() {
            return false;
        }

        let mut seen = HashSet::new();
        history.iter().all(|m| {
            seen.insert(m.coordinate) && state.board().get(m.coordinate) == m.player.mark()
        })
    }

    fn description() -> &'static str {
        "History is consistent with the board"
    }
}
