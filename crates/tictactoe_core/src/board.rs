//! The 3x3 grid.

use super::coordinate::{Coordinate, SIZE};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A row, column or diagonal: three cells in order.
pub type Line = [Cell; SIZE];

/// Row-major 3x3 grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Line; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows (top to bottom).
    pub fn from_rows(cells: [Line; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Overwrites the cell at the given coordinate.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord).is_empty()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[Line; SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding the given player's mark.
    pub fn count_marks(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.owner() == Some(player))
            .count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }
}
