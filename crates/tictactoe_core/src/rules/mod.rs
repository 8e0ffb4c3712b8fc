//! End-condition rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates the board;
//! derived lines (columns, diagonals) are fresh values.

pub mod lines;
pub mod tie;
pub mod win;

pub use lines::{anti_diagonal, diagonals, line_matches, main_diagonal, transpose};
pub use tie::check_tie;
pub use win::{check_columns, check_diagonals, check_rows};

use super::{Board, Outcome, Player};
use tracing::{debug, instrument};

/// Decides whether the game has concluded and why.
///
/// `current_player` is the player whose turn it is *after* the last move
/// was applied and the turn advanced, so a completed line is credited to
/// `current_player.opponent()`.
///
/// Checks run rows, columns, diagonals, then tie, stopping at the first
/// that fires. Line checks come first so that a ninth move completing a
/// line is reported as a win.
#[instrument(skip(board))]
pub fn evaluate(moves: usize, current_player: Player, board: &Board) -> Option<Outcome> {
    let outcome = check_rows(board, current_player)
        .or_else(|| check_columns(board, current_player))
        .or_else(|| check_diagonals(board, current_player))
        .or_else(|| check_tie(moves));

    if let Some(outcome) = outcome {
        debug!(?outcome, "End condition reached");
    }
    outcome
}

/// Returns true when the game is over.
pub fn check_for_end(moves: usize, current_player: Player, board: &Board) -> bool {
    evaluate(moves, current_player, board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, LineKind};

    const E: Cell = Cell::Empty;
    const O: Cell = Cell::Nought;
    const X: Cell = Cell::Cross;

    #[test]
    fn test_empty_board_not_over() {
        assert!(!check_for_end(0, Player::First, &Board::new()));
    }

    #[test]
    fn test_partial_board_without_line_not_over() {
        let board = Board::from_rows([[O, X, E], [E, O, E], [X, E, E]]);
        assert!(!check_for_end(4, Player::First, &board));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_rows([[O, X, O], [O, X, X], [X, O, O]]);
        assert_eq!(evaluate(9, Player::Second, &board), Some(Outcome::Tie));
    }

    #[test]
    fn test_ninth_move_completing_line_is_win_not_tie() {
        // First played c3 as the ninth move, completing the main diagonal.
        let board = Board::from_rows([[O, X, O], [X, O, X], [X, O, O]]);
        assert_eq!(
            evaluate(9, Player::Second, &board),
            Some(Outcome::Win {
                winner: Player::First,
                line: LineKind::MainDiagonal,
            })
        );
    }

    #[test]
    fn test_rows_checked_before_columns() {
        let board = Board::from_rows([[X, X, X], [X, O, O], [X, O, O]]);
        assert_eq!(
            evaluate(9, Player::First, &board),
            Some(Outcome::Win {
                winner: Player::Second,
                line: LineKind::Row(0),
            })
        );
    }
}
