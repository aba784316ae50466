//! Session management for concurrently running games.
//!
//! This module handles the server-side bookkeeping of active sessions:
//! - Session lifecycle (start, moves, retirement on completion)
//! - Pairing each player with an automated opponent on the same start grid
//! - Capacity management with oldest-first eviction
//! - Request validation before any state is touched
//!
//! The manager is an owned value with no global state; the caller decides
//! where it lives and serializes access to it.

use crate::config::GameConfig;
use log::info;
use shared::{select_next_color, ColorId, Game, GameError, GameView};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors returned for invalid `next_move` requests.
///
/// Both are raised before anything is mutated, so a rejected call leaves
/// every session exactly as it was and the caller can simply retry with
/// corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no session found for given id")]
    NoSuchSession,
    #[error("please select a valid color")]
    InvalidColor,
}

/// One tracked session: the player's game paired with the automated
/// opponent's game.
///
/// Both games start from an identical grid and evolve independently
/// through their own move sequences.
#[derive(Debug)]
pub struct GameSession {
    /// Unique session identifier assigned by the manager.
    pub id: u64,
    /// The game driven by the real player's move requests.
    pub player_game: Game,
    /// The game driven by the automated move selector.
    pub ai_game: Game,
}

/// Owns and drives all active sessions.
///
/// Sessions are kept in insertion order and capped at the configured games
/// limit; when a new game would exceed the limit the oldest session is
/// evicted, finished or not. Session ids start at 1 and keep increasing
/// for the manager's lifetime, so an evicted or retired id is never handed
/// out again.
pub struct SessionManager {
    config: GameConfig,
    sessions: VecDeque<GameSession>,
    next_id: u64,
}

impl SessionManager {
    /// Creates a manager with an empty session store.
    ///
    /// The configuration is read here once and stays constant afterwards.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sessions: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Starts a new session and returns its combined view.
    ///
    /// The player's board is filled randomly; the automated opponent gets
    /// an independent game seeded with a snapshot of that same board, so
    /// both sides start from the identical position and diverge as moves
    /// are applied.
    pub fn start(&mut self) -> Result<GameView, GameError> {
        if self.sessions.len() == self.config.games_limit() {
            if let Some(evicted) = self.sessions.pop_front() {
                info!("Evicted oldest session {} to make room", evicted.id);
            }
        }

        let player_game = Game::with_dimension(self.config.dimension(), self.config.palette())?;
        let ai_game = Game::with_grid(
            player_game.grid_snapshot(),
            self.config.dimension(),
            self.config.palette(),
        )?;

        let id = self.next_id;
        self.next_id += 1;

        let session = GameSession {
            id,
            player_game,
            ai_game,
        };
        info!("Started session {}", id);

        let view = build_view(&self.config, &session);
        self.sessions.push_back(session);

        Ok(view)
    }

    /// Applies the player's move to a session, lets the automated opponent
    /// respond, and returns the resulting view.
    ///
    /// The opponent receives one selector move per accepted request until
    /// its own game is over; from then on it is frozen while the player
    /// keeps playing. A session whose player game finishes here is retired
    /// immediately and its id becomes unknown.
    pub fn next_move(
        &mut self,
        session_id: u64,
        color: ColorId,
    ) -> Result<GameView, ValidationError> {
        let position = self
            .sessions
            .iter()
            .position(|session| session.id == session_id)
            .ok_or(ValidationError::NoSuchSession)?;

        if !self.config.palette().contains(&color) {
            return Err(ValidationError::InvalidColor);
        }

        let config = &self.config;
        let session = &mut self.sessions[position];

        session.player_game.apply_move(color);

        if !session.ai_game.is_game_over() {
            let ai_color = select_next_color(
                &session.ai_game.grid_snapshot(),
                config.dimension(),
                config.palette(),
            );
            session.ai_game.apply_move(ai_color);
        }

        let view = build_view(config, session);

        if view.game_over && self.sessions.remove(position).is_some() {
            info!("Retired finished session {}", session_id);
        }

        Ok(view)
    }

    /// Number of sessions currently tracked.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

/// Combines both games of a session into the view sent to clients.
fn build_view(config: &GameConfig, session: &GameSession) -> GameView {
    GameView {
        id: session.id,
        grid: session.player_game.grid_snapshot(),
        dimension: session.player_game.dimension(),
        game_over: session.player_game.is_game_over(),
        colors: config.palette().colors().to_vec(),
        move_history: session.player_game.move_history(),
        ai_move_history: session.ai_game.move_history(),
    }
}
