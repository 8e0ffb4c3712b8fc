//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two players at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Moves first and places noughts.
    #[display("Player1")]
    First,
    /// Moves second and places crosses.
    #[display("Player2")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn mark(self) -> Cell {
        mark_for(self)
    }
}

/// Maps a player to the cell value they write.
pub fn mark_for(player: Player) -> Cell {
    match player {
        Player::First => Cell::Nought,
        Player::Second => Cell::Cross,
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Mark of [`Player::First`].
    Nought,
    /// Mark of [`Player::Second`].
    Cross,
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player whose mark this is, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Nought => Some(Player::First),
            Cell::Cross => Some(Player::Second),
        }
    }

    /// Character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Nought => 'O',
            Cell::Cross => 'X',
        }
    }
}
