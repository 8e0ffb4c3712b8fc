//! Moves and the reasons a move can be refused.

use super::{Coordinate, CoordinateError, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{} -> {}", player, coordinate)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coordinate: Coordinate,
}

/// Error returned when a proposed move is refused.
///
/// All variants are user-correctable: the caller re-prompts and the game
/// state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input text is not a coordinate.
    #[display("Unparseable move: {}", _0)]
    Unparseable(CoordinateError),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Coordinate),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Unparseable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoordinateError> for MoveError {
    fn from(err: CoordinateError) -> Self {
        MoveError::Unparseable(err)
    }
}
