//! # Flood Game Server Library
//!
//! This library provides the service side of the flood-fill tile game: it
//! owns every running session, applies player moves, lets the automated
//! opponent respond, and answers clients over a small UDP protocol.
//!
//! ## Core Responsibilities
//!
//! ### Session Management
//! Each session pairs the real player's game with an automated opponent's
//! game seeded from an identical starting grid. The session manager hands
//! out sequential session ids, bounds how many sessions are tracked at a
//! time (evicting the oldest when a new game would exceed the limit), and
//! retires a session the moment its player finishes the board.
//!
//! ### Request Validation
//! Every move request is validated before any state changes: an unknown
//! session id or a color outside the configured palette rejects the call
//! and leaves all sessions exactly as they were.
//!
//! ### State Marshalling
//! After every accepted request the server replies with the combined view
//! of the session (the player's grid and history, the opponent's history,
//! and the configured palette) so clients need no other source of truth.
//!
//! ## Architecture Design
//!
//! ### Sequential Request Loop
//! The server handles one datagram at a time: receive, mutate, respond.
//! All game computation is synchronous and bounded (a board holds at most
//! 100 cells and each traversal visits a cell at most once), so there is
//! no locking, no cancellation, and no partially applied request.
//!
//! ### UDP-Based Communication
//! Requests and responses are single bincode-encoded datagrams. The
//! protocol is strict request/response; the server never initiates
//! traffic, and malformed datagrams are logged and dropped.
//!
//! ## Module Organization
//!
//! ### Config Module (`config`)
//! Validates the palette, board dimension, and session capacity once at
//! startup; the values are immutable afterwards.
//!
//! ### Session Module (`session`)
//! The session store and its operations: `start`, `next_move`, and
//! `session_count`, plus the paired automated opponent.
//!
//! ### Network Module (`network`)
//! Socket handling, packet decoding, and the mapping from session-level
//! errors to rejection replies.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::config::GameConfig;
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Bind a server with the stock red/green/blue palette on a 5x5
//!     // board, tracking at most ten sessions.
//!     let mut server = Server::new("127.0.0.1:8080", GameConfig::standard()).await?;
//!
//!     // Runs the receive/handle/respond loop until the process is
//!     // terminated.
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod network;
pub mod session;
