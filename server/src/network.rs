//! Server network layer answering game requests over UDP.
//!
//! The protocol is strict request/response: every valid datagram holds one
//! request [`Packet`] and is answered with exactly one response datagram.
//! Datagrams are handled sequentially in arrival order, which is what
//! serializes access to the session store.

use crate::config::GameConfig;
use crate::session::SessionManager;
use bincode::{deserialize, serialize};
use log::{error, info, warn};
use shared::Packet;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// UDP front end owning the session store.
pub struct Server {
    socket: UdpSocket,
    sessions: SessionManager,
}

impl Server {
    /// Binds the server socket and prepares an empty session store.
    pub async fn new(
        addr: &str,
        config: GameConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let socket = UdpSocket::bind(addr).await?;
        info!("Server listening on {}", socket.local_addr()?);

        Ok(Server {
            socket,
            sessions: SessionManager::new(config),
        })
    }

    /// The address the socket is actually bound to.
    ///
    /// Useful when binding to port 0 in tests.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs the receive/handle/respond loop.
    ///
    /// Does not return during normal operation; socket-level receive
    /// errors and malformed datagrams are logged and skipped.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = [0u8; 2048];

        loop {
            let (len, addr) = match self.socket.recv_from(&mut buffer).await {
                Ok(received) => received,
                Err(e) => {
                    error!("Error receiving datagram: {}", e);
                    continue;
                }
            };

            let packet = match deserialize::<Packet>(&buffer[0..len]) {
                Ok(packet) => packet,
                Err(_) => {
                    warn!("Failed to deserialize packet from {}", addr);
                    continue;
                }
            };

            if let Some(response) = self.handle_packet(packet, addr) {
                match serialize(&response) {
                    Ok(data) => {
                        if let Err(e) = self.socket.send_to(&data, addr).await {
                            error!("Failed to send response to {}: {}", addr, e);
                        }
                    }
                    Err(e) => error!("Failed to serialize response for {}: {}", addr, e),
                }
            }
        }
    }

    /// Maps one request packet to its response packet.
    fn handle_packet(&mut self, packet: Packet, addr: SocketAddr) -> Option<Packet> {
        match packet {
            Packet::StartGame => match self.sessions.start() {
                Ok(view) => {
                    info!("Started session {} for {}", view.id, addr);
                    Some(Packet::GameState(view))
                }
                Err(e) => {
                    error!("Failed to start a session: {}", e);
                    Some(Packet::Rejected {
                        reason: e.to_string(),
                    })
                }
            },

            Packet::NextMove { game_id, color } => {
                match self.sessions.next_move(game_id, color) {
                    Ok(view) => Some(Packet::GameState(view)),
                    Err(e) => {
                        warn!("Rejected move from {}: {}", addr, e);
                        Some(Packet::Rejected {
                            reason: e.to_string(),
                        })
                    }
                }
            }

            // Response payloads arriving at the server are client bugs.
            Packet::GameState(_) | Packet::Rejected { .. } => {
                warn!("Ignoring unexpected packet from {}", addr);
                None
            }
        }
    }

    /// Number of sessions currently tracked, for diagnostics and tests.
    pub fn session_count(&self) -> usize {
        self.sessions.session_count()
    }
}
