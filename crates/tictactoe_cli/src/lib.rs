//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Console**: injected line-oriented I/O port ([`Console`]), with a
//!   stdio implementation and a scripted one for tests
//! - **Render**: draws the board with row and column labels
//! - **Session**: the prompt / validate / apply loop
//! - **Config**: player names and grid style from TOML and flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, GridStyle};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use render::render_board;
pub use session::{INVALID_INPUT, Session, SessionError};
