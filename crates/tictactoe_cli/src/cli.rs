//! Command-line interface for the tictactoe binary.

use crate::config::GridStyle;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
///
/// Players take turns typing a coordinate such as `a1` or `C3`.
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid style: box or plain
    #[arg(long)]
    pub grid: Option<GridStyle>,

    /// Display name of the first player (plays O)
    #[arg(long)]
    pub first_player: Option<String>,

    /// Display name of the second player (plays X)
    #[arg(long)]
    pub second_player: Option<String>,
}
