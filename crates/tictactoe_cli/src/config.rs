//! Game configuration: player names and grid style.
//!
//! Everything is optional. With no file and no flags the defaults give the
//! classic `Player1` / `Player2` box-drawn game.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// How the board grid is drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GridStyle {
    /// Double-line box-drawing characters.
    #[default]
    Box,
    /// ASCII `|`, `-` and `+`.
    Plain,
}

/// Resolved configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the first player.
    #[serde(default = "default_first_player")]
    first_player: String,

    /// Name shown for the second player.
    #[serde(default = "default_second_player")]
    second_player: String,

    /// Grid drawing style.
    #[serde(default)]
    grid: GridStyle,
}

fn default_first_player() -> String {
    Player::First.to_string()
}

fn default_second_player() -> String {
    Player::Second.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            second_player: default_second_player(),
            grid: GridStyle::default(),
        }
    }
}

impl GameConfig {
    /// Display name of `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::First => &self.first_player,
            Player::Second => &self.second_player,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(first = %config.first_player, second = %config.second_player, "Config loaded");
        Ok(config)
    }

    /// Builds the configuration for a run: file (if any), then flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(name) = &cli.first_player {
            config.first_player = name.clone();
        }
        if let Some(name) = &cli.second_player {
            config.second_player = name.clone();
        }
        if let Some(grid) = cli.grid {
            config.grid = grid;
        }

        config.validate()?;
        debug!(?config, "Config resolved");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_player.trim().is_empty() || self.second_player.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.first_player == self.second_player {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                self.first_player
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_player_names() {
        let config = GameConfig::default();
        assert_eq!(config.name_of(Player::First), "Player1");
        assert_eq!(config.name_of(Player::Second), "Player2");
        assert_eq!(*config.grid(), GridStyle::Box);
    }

    #[test]
    fn test_grid_style_parses_case_insensitively() {
        assert_eq!("plain".parse::<GridStyle>().unwrap(), GridStyle::Plain);
        assert_eq!("BOX".parse::<GridStyle>().unwrap(), GridStyle::Box);
        assert!("fancy".parse::<GridStyle>().is_err());
        assert_eq!(GridStyle::Plain.to_string(), "plain");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("second_player = \"Bob\"").unwrap();
        assert_eq!(config.first_player(), "Player1");
        assert_eq!(config.second_player(), "Bob");
        assert_eq!(*config.grid(), GridStyle::Box);
    }

    #[test]
    fn test_resolve_without_flags_is_default() {
        let config = GameConfig::resolve(&Cli::default()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli {
            first_player: Some("Ada".to_string()),
            grid: Some(GridStyle::Plain),
            ..Cli::default()
        };
        let config = GameConfig::resolve(&cli).unwrap();
        assert_eq!(config.name_of(Player::First), "Ada");
        assert_eq!(config.name_of(Player::Second), "Player2");
        assert_eq!(*config.grid(), GridStyle::Plain);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let cli = Cli {
            first_player: Some("Player2".to_string()),
            ..Cli::default()
        };
        let err = GameConfig::resolve(&cli).unwrap_err();
        assert!(err.message.contains("Both players"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let cli = Cli {
            second_player: Some("  ".to_string()),
            ..Cli::default()
        };
        assert!(GameConfig::resolve(&cli).is_err());
    }
}
