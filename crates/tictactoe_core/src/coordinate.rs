//! Board coordinates and the `a1`..`c3` text notation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A cell address on the board.
///
/// Rows are labelled `A`-`C` top to bottom, columns `1`-`3` left to right.
/// Both indices are always in `0..3`; the only way to build a coordinate is
/// through [`Coordinate::new`], [`Coordinate::from_index`] or parsing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}{}", (b'a' + *row as u8) as char, col + 1)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate, or `None` if either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Row label letter (`A`-`C`).
    pub fn row_label(self) -> char {
        (b'A' + self.row as u8) as char
    }
}

/// Why a piece of text is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// Input was not exactly two characters.
    #[display("Expected two characters like `a1`, got {} characters", _0)]
    WrongLength(usize),

    /// First character is not a row letter.
    #[display("Row must be A, B or C, got {:?}", _0)]
    InvalidRow(char),

    /// Second character is not a column digit.
    #[display("Column must be 1, 2 or 3, got {:?}", _0)]
    InvalidColumn(char),
}

impl std::error::Error for CoordinateError {}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (row_char, col_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => (r, c),
            _ => return Err(CoordinateError::WrongLength(s.chars().count())),
        };

        let row = match row_char.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            _ => return Err(CoordinateError::InvalidRow(row_char)),
        };

        let col = match col_char {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            _ => return Err(CoordinateError::InvalidColumn(col_char)),
        };

        Ok(Self { row, col })
    }
}
