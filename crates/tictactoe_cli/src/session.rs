//! The interactive game loop.

use crate::config::GameConfig;
use crate::console::Console;
use crate::render::render_board;
use serde::Serialize;
use tictactoe_core::{Game, Move, Outcome};
use tracing::{debug, info, instrument, warn};

/// Notice printed when a line is not a playable move.
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Error that ends a session before the game does.
#[derive(Debug, derive_more::Display)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ran out before the game ended.
    #[display("Input closed before the game ended")]
    InputClosed,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Summary of a finished game, logged as JSON.
#[derive(Debug, Serialize)]
struct GameReport<'a> {
    outcome: Outcome,
    moves: &'a [Move],
}

/// One game played over a [`Console`].
pub struct Session<C> {
    game: Game,
    console: C,
    config: GameConfig,
}

impl<C: Console> Session<C> {
    /// Creates a session with a fresh game.
    pub fn new(console: C, config: GameConfig) -> Self {
        Self {
            game: Game::new(),
            console,
            config,
        }
    }

    /// Returns the console, consuming the session.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays until the game ends.
    ///
    /// Bad input is answered with [`INVALID_INPUT`] and a fresh prompt; it
    /// never ends the session.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        info!("Starting game");
        self.show_board()?;

        loop {
            if let Some(outcome) = self.game.outcome() {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let player = self.game.current_player();
            let prompt = format!("Please enter a move, {}: ", self.config.name_of(player));
            self.console.prompt(&prompt)?;

            let Some(line) = self.console.read_line()? else {
                warn!(%player, "Input closed mid-game");
                return Err(SessionError::InputClosed);
            };

            match self.game.submit(&line) {
                Ok(_) => self.show_board()?,
                Err(err) => {
                    debug!(%err, input = %line.trim(), "Move rejected");
                    self.console.write_line(INVALID_INPUT)?;
                }
            }
        }
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        for line in render_board(self.game.state().board(), *self.config.grid()) {
            self.console.write_line(&line)?;
        }
        self.console.write_line("")?;
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        let message = match outcome.winner() {
            Some(winner) => format!("{} wins.", self.config.name_of(winner)),
            None => "Tie!".to_string(),
        };
        self.console.write_line(&message)?;

        let report = GameReport {
            outcome,
            moves: self.game.state().history(),
        };
        match serde_json::to_string(&report) {
            Ok(json) => info!(report = %json, "Game finished"),
            Err(err) => warn!(%err, "Could not serialize game report"),
        }
        Ok(())
    }
}
