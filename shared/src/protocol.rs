//! Wire protocol between the game server and its clients.
//!
//! Requests and responses travel as single bincode-encoded datagrams, one
//! [`Packet`] per datagram.

use crate::color::{ColorDef, ColorId};
use serde::{Deserialize, Serialize};

/// Combined view of one session, returned after `start` and every move.
///
/// `grid` and `move_history` describe the player's game; the automated
/// opponent only exposes its move list. The configured palette is echoed
/// back so clients can render without extra configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub id: u64,
    pub grid: Vec<ColorId>,
    pub dimension: usize,
    pub game_over: bool,
    pub colors: Vec<ColorDef>,
    pub move_history: Vec<ColorId>,
    pub ai_move_history: Vec<ColorId>,
}

/// Datagram payloads exchanged between client and server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Packet {
    /// Client asks for a fresh session.
    StartGame,
    /// Client plays `color` in session `game_id`.
    NextMove { game_id: u64, color: ColorId },

    /// Server answer carrying the session state after a successful call.
    GameState(GameView),
    /// Server answer when a request was rejected.
    Rejected { reason: String },
}
