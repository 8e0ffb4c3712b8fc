//! Line extraction and the shared line-match predicate.

use crate::board::Line;
use crate::Board;

/// A line matches iff all three cells equal the first and it is not empty.
pub fn line_matches(line: &Line) -> bool {
    let first = line[0];
    !first.is_empty() && line.iter().all(|&cell| cell == first)
}

/// Returns the columns of the board as rows (cell[r][c] -> cell[c][r]).
pub fn transpose(rows: &[Line; 3]) -> [Line; 3] {
    std::array::from_fn(|c| std::array::from_fn(|r| rows[r][c]))
}

/// Cells where row == column.
pub fn main_diagonal(rows: &[Line; 3]) -> Line {
    std::array::from_fn(|i| rows[i][i])
}

/// Cells (0,2), (1,1), (2,0).
///
/// Swapping the first and last rows turns the anti-diagonal into the
/// main diagonal of the flipped grid.
pub fn anti_diagonal(rows: &[Line; 3]) -> Line {
    let flipped = [rows[2], rows[1], rows[0]];
    main_diagonal(&flipped)
}

/// Both diagonals as a two-line board: main first, then anti.
pub fn diagonals(board: &Board) -> [Line; 2] {
    [main_diagonal(board.rows()), anti_diagonal(board.rows())]
}
