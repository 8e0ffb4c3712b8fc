//! Alternating turn invariant: First, Second, First, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate, starting with [`Player::First`].
///
/// Between turns, First is to move exactly when the move count is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|m| m.player != Player::First) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if state.moves() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_empty_state_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        for index in [0, 4, 2, 6, 8] {
            state.apply_move(Coordinate::from_index(index).unwrap());
            state.advance_turn();
            assert!(AlternatingTurnInvariant::holds(&state));
        }
        assert_eq!(state.current_player(), Player::Second);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.apply_move(Coordinate::from_index(0).unwrap());
        state.apply_move(Coordinate::from_index(4).unwrap());
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
