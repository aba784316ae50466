//! Game logic and wire protocol shared between the flood game server and
//! its clients.
//!
//! Everything in this crate is pure, synchronous computation over plain
//! data: the color palette, the grid topology, the game engine, the
//! automated opponent, and the serde types that travel over the wire.

pub mod color;
pub mod game;
pub mod grid;
pub mod protocol;
pub mod solver;

pub use color::{default_colors, ColorDef, ColorId, Palette, PaletteError};
pub use game::{Game, GameError, MAX_DIMENSION, MIN_DIMENSION};
pub use protocol::{GameView, Packet};
pub use solver::select_next_color;
