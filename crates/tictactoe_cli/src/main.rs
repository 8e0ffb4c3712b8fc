//! Two-player terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, GameConfig, Session, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;

    let mut session = Session::new(StdConsole::stdio(), config);
    let outcome = session.run().context("Game aborted")?;

    info!(?outcome, "Exiting");
    Ok(())
}
