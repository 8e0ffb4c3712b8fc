//! The game state machine: InProgress until the end-condition checker fires.

use super::action::MoveError;
use super::invariants;
use super::phases::{Outcome, Phase};
use super::rules;
use super::{Coordinate, GameState, Player};
use tracing::{debug, info, instrument};

/// A tic-tac-toe game: board/turn state plus its lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    phase: Phase,
}

impl Game {
    /// Creates a new game and runs the end-condition check once on the
    /// empty board.
    #[instrument]
    pub fn new() -> Self {
        let mut game = Self {
            state: GameState::new(),
            phase: Phase::InProgress,
        };
        game.update_phase();
        game
    }

    /// Returns the board/turn state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Empty cells, row-major.
    pub fn legal_targets(&self) -> Vec<Coordinate> {
        if self.is_over() {
            return Vec::new();
        }
        self.state.board().empty_cells()
    }

    /// Parses `input` as a coordinate and plays it.
    #[instrument(skip(self))]
    pub fn submit(&mut self, input: &str) -> Result<Phase, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let coord: Coordinate = input.parse()?;
        self.play(coord)
    }

    /// Places the current player's mark at `coord`, hands over the turn and
    /// re-evaluates the end condition.
    ///
    /// Refused moves leave the game untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, coord: Coordinate) -> Result<Phase, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.is_legal_target(coord) {
            debug!(%coord, "Target cell occupied");
            return Err(MoveError::Occupied(coord));
        }

        self.state.apply_move(coord);
        self.state.advance_turn();

        debug_assert!(
            invariants::verify(&self.state).is_ok(),
            "Game invariants violated after {coord}"
        );

        self.update_phase();
        Ok(self.phase)
    }

    fn update_phase(&mut self) {
        if let Some(outcome) = rules::evaluate(
            self.state.moves(),
            self.state.current_player(),
            self.state.board(),
        ) {
            info!(?outcome, moves = self.state.moves(), "Game ended");
            self.phase = Phase::Ended(outcome);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
