//! Engine configuration: search algorithm, AI side assignment and search limits.

use std::fmt;
use std::str::FromStr;

use spheres_core::Color;

use crate::error::ConfigError;

/// Plies searched below each candidate move.
pub const DEFAULT_DEPTH: u8 = 2;

/// Which tree search scores candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Minimax,
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the numeric selectors `0` / `1` or the names.
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "minimax" => Ok(Algorithm::Minimax),
            "1" | "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            other => Err(ConfigError::UnknownAlgorithm {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// Which color the AI plays this turn.
///
/// Against a human the AI always plays Red. In an AI-versus-AI game the
/// driver says which side is on move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SideAssignment {
    #[default]
    HumanVsAi,
    AiVsAi(Color),
}

impl SideAssignment {
    /// Parse the driver's game mode (`0` human vs AI, `1` AI vs AI) and, for
    /// AI vs AI, its side selector (`0` Red, `1` Purple).
    pub fn parse(game_mode: &str, side: &str) -> Result<Self, ConfigError> {
        match game_mode.trim() {
            "0" => Ok(SideAssignment::HumanVsAi),
            "1" => match side.trim() {
                "0" => Ok(SideAssignment::AiVsAi(Color::Red)),
                "1" => Ok(SideAssignment::AiVsAi(Color::Purple)),
                other => Err(ConfigError::UnknownSide {
                    value: other.to_string(),
                }),
            },
            other => Err(ConfigError::UnknownGameMode {
                value: other.to_string(),
            }),
        }
    }

    /// The color the AI moves for.
    pub const fn color(self) -> Color {
        match self {
            SideAssignment::HumanVsAi => Color::Red,
            SideAssignment::AiVsAi(color) => color,
        }
    }
}

/// Fixed search limits.
///
/// A node with no moves is always bounded by
/// [`INFINITY`](crate::eval::score::INFINITY), which lies beyond any static
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each candidate move.
    pub depth: u8,
}

impl SearchConfig {
    pub const fn new(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
