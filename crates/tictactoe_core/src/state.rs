//! Board and turn state.

use super::action::Move;
use super::{Board, Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The authoritative grid, whose turn it is, and how many moves were made.
///
/// Moves are atomic: [`GameState::apply_move`] writes one cell, bumps the
/// counter and records the move, or panics without touching anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    moves: usize,
    history: Vec<Move>,
}

impl GameState {
    /// Creates an initialized state: empty board, no moves, first player up.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::First,
            moves: 0,
            history: Vec::new(),
        }
    }

    /// Resets to an empty board with the first player to move.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of marks placed so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True iff the target cell is empty.
    ///
    /// Range is already guaranteed by [`Coordinate`].
    pub fn is_legal_target(&self, coord: Coordinate) -> bool {
        self.board.is_empty(coord)
    }

    /// Writes the current player's mark at `coord`.
    ///
    /// # Panics
    ///
    /// If `coord` is not a legal target. Callers gate every move through
    /// [`GameState::is_legal_target`] first.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, coord: Coordinate) {
        assert!(
            self.is_legal_target(coord),
            "apply_move called on occupied cell {coord}"
        );

        let player = self.current_player;
        self.board.set(coord, player.mark());
        self.moves += 1;
        self.history.push(Move::new(player, coord));
        debug!(moves = self.moves, "Move applied");
    }

    /// Hands the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn at(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.moves(), 0);
        assert_eq!(state.current_player(), Player::First);
        assert_eq!(state.board().filled(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_move_writes_current_mark() {
        let mut state = GameState::new();
        state.apply_move(at("b2"));
        assert_eq!(state.board().get(at("b2")), Cell::Nought);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.history(), &[Move::new(Player::First, at("b2"))]);
        // Turn only changes on request.
        assert_eq!(state.current_player(), Player::First);
    }

    #[test]
    fn test_advance_turn_alternates() {
        let mut state = GameState::new();
        state.advance_turn();
        assert_eq!(state.current_player(), Player::Second);
        state.advance_turn();
        assert_eq!(state.current_player(), Player::First);
    }

    #[test]
    fn test_legal_target_tracks_occupancy() {
        let mut state = GameState::new();
        assert!(state.is_legal_target(at("a1")));
        state.apply_move(at("a1"));
        assert!(!state.is_legal_target(at("a1")));
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_apply_move_on_occupied_cell_panics() {
        let mut state = GameState::new();
        state.apply_move(at("a1"));
        state.advance_turn();
        state.apply_move(at("a1"));
    }

    #[test]
    fn test_initialize_resets() {
        let mut state = GameState::new();
        state.apply_move(at("c3"));
        state.advance_turn();
        state.initialize();
        assert_eq!(state, GameState::new());
    }
}
