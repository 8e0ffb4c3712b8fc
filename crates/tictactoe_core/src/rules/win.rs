//! Win detection: rows, columns and diagonals.

use super::lines::{diagonals, line_matches, transpose};
use crate::board::Line;
use crate::{Board, LineKind, Outcome, Player};
use tracing::{instrument, warn};

/// Scans `lines` in order and reports the first match.
///
/// The winner is the opponent of `current_player`, since the turn has
/// already advanced past the player who placed the winning mark.
fn check_lines(
    lines: &[Line],
    current_player: Player,
    kind: impl Fn(usize) -> LineKind,
) -> Option<Outcome> {
    let (index, line) = lines.iter().enumerate().find(|(_, line)| line_matches(line))?;
    let winner = current_player.opponent();
    if line[0].owner() != Some(winner) {
        warn!(
            ?winner,
            mark = ?line[0],
            "Completed line does not belong to the player credited with it"
        );
    }
    Some(Outcome::Win {
        winner,
        line: kind(index),
    })
}

/// Checks the three rows.
#[instrument(skip(board))]
pub fn check_rows(board: &Board, current_player: Player) -> Option<Outcome> {
    check_lines(board.rows(), current_player, LineKind::Row)
}

/// Checks the three columns by running the row check on the transpose.
#[instrument(skip(board))]
pub fn check_columns(board: &Board, current_player: Player) -> Option<Outcome> {
    check_lines(&transpose(board.rows()), current_player, LineKind::Column)
}

/// Checks both diagonals as a two-line board.
#[instrument(skip(board))]
pub fn check_diagonals(board: &Board, current_player: Player) -> Option<Outcome> {
    check_lines(&diagonals(board), current_player, |i| match i {
        0 => LineKind::MainDiagonal,
        _ => LineKind::AntiDiagonal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    const E: Cell = Cell::Empty;
    const O: Cell = Cell::Nought;
    const X: Cell = Cell::Cross;

    fn win(winner: Player, line: LineKind) -> Option<Outcome> {
        Some(Outcome::Win { winner, line })
    }

    #[test]
    fn test_each_row_wins() {
        for r in 0..3 {
            let mut rows = [[E; 3]; 3];
            rows[r] = [O; 3];
            let board = Board::from_rows(rows);
            assert_eq!(
                check_rows(&board, Player::Second),
                win(Player::First, LineKind::Row(r))
            );
        }
    }

    #[test]
    fn test_each_column_wins() {
        for c in 0..3 {
            let mut rows = [[E; 3]; 3];
            for row in rows.iter_mut() {
                row[c] = X;
            }
            let board = Board::from_rows(rows);
            assert_eq!(check_rows(&board, Player::First), None);
            assert_eq!(
                check_columns(&board, Player::First),
                win(Player::Second, LineKind::Column(c))
            );
        }
    }

    #[test]
    fn test_main_diagonal_wins() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(
            check_diagonals(&board, Player::First),
            win(Player::Second, LineKind::MainDiagonal)
        );
    }

    #[test]
    fn test_anti_diagonal_wins() {
        let board = Board::from_rows([[X, X, O], [E, O, E], [O, E, E]]);
        assert_eq!(
            check_diagonals(&board, Player::Second),
            win(Player::First, LineKind::AntiDiagonal)
        );
    }

    #[test]
    fn test_winner_is_opponent_of_current_turn() {
        let board = Board::from_rows([[O, O, O], [X, X, E], [E, E, E]]);
        assert_eq!(
            check_rows(&board, Player::Second).and_then(|o| o.winner()),
            Some(Player::First)
        );
        assert_eq!(
            check_rows(&board, Player::First).and_then(|o| o.winner()),
            Some(Player::Second)
        );
    }

    #[test]
    fn test_empty_lines_never_win() {
        let board = Board::new();
        assert_eq!(check_rows(&board, Player::First), None);
        assert_eq!(check_columns(&board, Player::First), None);
        assert_eq!(check_diagonals(&board, Player::First), None);
    }
}
