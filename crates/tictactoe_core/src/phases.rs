//! Game phases and outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Which line completed a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row index 0-2 (A-C).
    #[display("row {}", _0)]
    Row(usize),
    /// Column index 0-2 (1-3).
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Outcome of a finished game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{} wins.", winner)]
    Win {
        /// The player who placed the winning mark.
        winner: Player,
        /// The completed line.
        line: LineKind,
    },
    /// Board full with no completed line.
    #[display("Tie!")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Lifecycle of a game. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// The end-condition checker fired.
    Ended(Outcome),
}

impl Phase {
    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::InProgress => None,
            Phase::Ended(outcome) => Some(*outcome),
        }
    }
}
