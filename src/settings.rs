//! Game settings: optional TOML file, command-line overrides, and the
//! validated configuration a game is started from.

use crate::games::mobility::{MAX_SIDE, SIDE, Symbol};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings gathered before the setup prompts.
///
/// `play_as`, `pieces` and `turns` pre-answer the matching prompt; they are
/// validated exactly like typed answers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct GameSettings {
    /// Squares per board side.
    #[serde(default = "default_side")]
    side: usize,

    /// Seed for piece placement and the computer's choices.
    #[serde(default)]
    seed: Option<u64>,

    /// Symbol the human plays.
    #[serde(default)]
    play_as: Option<Symbol>,

    /// Pieces per player.
    #[serde(default)]
    pieces: Option<u32>,

    /// Turn limit.
    #[serde(default)]
    turns: Option<u32>,
}

fn default_side() -> usize {
    SIDE
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            side: default_side(),
            seed: None,
            play_as: None,
            pieces: None,
            turns: None,
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(side = settings.side, "Settings loaded");
        Ok(settings)
    }

    /// Checks values that cannot be corrected at a prompt.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_SIDE).contains(&self.side) {
            return Err(ConfigError::new(format!(
                "Board side must be between 2 and {}, got {}",
                MAX_SIDE, self.side
            )));
        }
        Ok(())
    }
}

/// Validated configuration for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Symbol the human plays.
    symbol: Symbol,
    /// Pieces per player.
    pieces: usize,
    /// Turn limit.
    turns: u32,
    /// Squares per board side.
    side: usize,
}

impl GameConfig {
    /// Builds a configuration, enforcing the piece and turn bounds.
    #[instrument]
    pub fn new(symbol: Symbol, pieces: u32, turns: u32, side: usize) -> Result<Self, SetupError> {
        Ok(Self {
            symbol,
            pieces: check_pieces(pieces, side)?,
            turns: check_turns(turns)?,
            side,
        })
    }
}

/// A setup answer that must be asked again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Neither `X` nor `O`.
    #[display("Please provide with 'X' or 'O' as answer!")]
    NotASymbol,

    /// Not a non-negative whole number.
    #[display("'{_0}' is not a positive whole number. Please try again!")]
    NotANumber(#[error(not(source))] String),

    /// Zero pieces.
    #[display("Oops! The number of pieces cannot be zero! Please try again!")]
    ZeroPieces,

    /// The pieces would not fit on the board.
    #[display(
        "Oops! Thats too many pieces! Please try again with any positive number up to: {max}"
    )]
    TooManyPieces {
        /// Largest allowed count.
        max: usize,
    },

    /// Zero turns.
    #[display("Number of turns cannot be zero. Please try again!")]
    ZeroTurns,
}

/// Parses a symbol answer, case-insensitive.
#[instrument]
pub fn parse_symbol(text: &str) -> Result<Symbol, SetupError> {
    match text.trim() {
        "x" | "X" => Ok(Symbol::X),
        "o" | "O" => Ok(Symbol::O),
        _ => Err(SetupError::NotASymbol),
    }
}

fn parse_count(text: &str) -> Result<u32, SetupError> {
    let text = text.trim();
    text.parse::<u32>()
        .map_err(|_| SetupError::NotANumber(text.to_string()))
}

/// Checks a piece count fits twice on a `side` board.
#[instrument]
pub fn check_pieces(pieces: u32, side: usize) -> Result<usize, SetupError> {
    let max = side * side / 2;
    let pieces = pieces as usize;
    if pieces == 0 {
        Err(SetupError::ZeroPieces)
    } else if pieces > max {
        Err(SetupError::TooManyPieces { max })
    } else {
        Ok(pieces)
    }
}

/// Parses and checks a piece-count answer.
#[instrument]
pub fn parse_pieces(text: &str, side: usize) -> Result<usize, SetupError> {
    check_pieces(parse_count(text)?, side)
}

/// Checks a turn limit is positive.
#[instrument]
pub fn check_turns(turns: u32) -> Result<u32, SetupError> {
    if turns == 0 {
        Err(SetupError::ZeroTurns)
    } else {
        Ok(turns)
    }
}

/// Parses and checks a turn-limit answer.
#[instrument]
pub fn parse_turns(text: &str) -> Result<u32, SetupError> {
    check_turns(parse_count(text)?)
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
    #[instrument(skip(message))]
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
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("x\n"), Ok(Symbol::X));
        assert_eq!(parse_symbol("O"), Ok(Symbol::O));
        assert_eq!(parse_symbol("xo"), Err(SetupError::NotASymbol));
    }

    #[test]
    fn test_piece_bounds() {
        assert_eq!(parse_pieces("24", SIDE), Ok(24));
        assert_eq!(parse_pieces("25", SIDE), Err(SetupError::TooManyPieces { max: 24 }));
        assert_eq!(parse_pieces("0", SIDE), Err(SetupError::ZeroPieces));
        assert_eq!(
            parse_pieces("-3", SIDE),
            Err(SetupError::NotANumber("-3".to_string()))
        );
        assert_eq!(parse_pieces("2", 2), Ok(2));
    }

    #[test]
    fn test_turns() {
        assert_eq!(parse_turns(" 12 "), Ok(12));
        assert_eq!(parse_turns("0"), Err(SetupError::ZeroTurns));
        assert!(GameConfig::new(Symbol::X, 3, 0, SIDE).is_err());
    }

    #[test]
    fn test_side_range() {
        assert!(GameSettings::default().validate().is_ok());
        assert!(GameSettings::default().with_side(11).validate().is_err());
        assert!(GameSettings::default().with_side(1).validate().is_err());
    }
}
