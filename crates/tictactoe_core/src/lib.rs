//! Tic-tac-toe game logic.
//!
//! Two pieces do the work:
//!
//! - [`GameState`] owns the 3x3 board, whose turn it is and the move count.
//! - [`rules`] decides from a board snapshot whether the game has ended in a
//!   row, column or diagonal win, or a tie.
//!
//! [`Game`] ties them together into a two-phase state machine that a console
//! loop drives one line of input at a time.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Phase, Player};
//!
//! let mut game = Game::new();
//! for input in ["a1", "b1", "a2", "b2"] {
//!     assert_eq!(game.submit(input), Ok(Phase::InProgress));
//! }
//! let phase = game.submit("A3").unwrap();
//! assert_eq!(phase.outcome().and_then(|o| o.winner()), Some(Player::First));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coordinate;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, Line};
pub use coordinate::{Coordinate, CoordinateError, SIZE};
pub use game::Game;
pub use phases::{LineKind, Outcome, Phase};
pub use rules::{check_for_end, evaluate};
pub use state::GameState;
pub use types::{Cell, Player, mark_for};
