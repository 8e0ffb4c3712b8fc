//! Tie detection.

use crate::Outcome;

/// Number of moves that fills the board.
pub const MAX_MOVES: usize = 9;

/// A tie once all nine cells are filled.
///
/// Only meaningful after the line checks have run for the same board.
pub fn check_tie(moves: usize) -> Option<Outcome> {
    (moves == MAX_MOVES).then_some(Outcome::Tie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_only_at_nine_moves() {
        assert_eq!(check_tie(9), Some(Outcome::Tie));
        for moves in 0..9 {
            assert_eq!(check_tie(moves), None);
        }
    }
}
