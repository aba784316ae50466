//! Runtime configuration for the game server.
//!
//! All values are validated here once, at startup, and are read-only for
//! the rest of the process lifetime.

use shared::{ColorDef, Palette, PaletteError, MAX_DIMENSION, MIN_DIMENSION};
use thiserror::Error;

/// Errors raised while validating the server configuration.
///
/// All of them are fatal at startup; none can occur once the server runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(
        "the game dimension must be an integer between {min} and {max}, got {0}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidDimension(usize),
    #[error("the games limit must be at least 1, got {0}")]
    InvalidGamesLimit(usize),
}

/// Immutable game parameters, read once when the session manager is built.
#[derive(Debug, Clone)]
pub struct GameConfig {
    palette: Palette,
    dimension: usize,
    games_limit: usize,
}

impl GameConfig {
    /// Validates and freezes a configuration.
    pub fn new(
        colors: Vec<ColorDef>,
        dimension: usize,
        games_limit: usize,
    ) -> Result<Self, ConfigError> {
        let palette = Palette::new(colors)?;

        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(ConfigError::InvalidDimension(dimension));
        }

        if games_limit == 0 {
            return Err(ConfigError::InvalidGamesLimit(games_limit));
        }

        Ok(Self {
            palette,
            dimension,
            games_limit,
        })
    }

    /// The stock configuration: red/green/blue on a 5x5 board, at most ten
    /// concurrent sessions.
    pub fn standard() -> Self {
        Self {
            palette: Palette::rgb(),
            dimension: 5,
            games_limit: 10,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn games_limit(&self) -> usize {
        self.games_limit
    }
}
