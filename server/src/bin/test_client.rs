use bincode::{deserialize, serialize};
use shared::{select_next_color, ColorId, GameView, Packet, Palette};
use std::net::SocketAddr;
use tokio::net::UdpSocket;

// A session should collapse long before this many moves.
const MAX_MOVES: usize = 1000;

/// Renders the board as one line of cell ids per row.
fn render_grid(grid: &[ColorId], dimension: usize) -> String {
    grid.chunks(dimension)
        .map(|row| {
            row.iter()
                .map(|color| color.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

async fn send_request(
    socket: &UdpSocket,
    server_addr: SocketAddr,
    request: &Packet,
) -> Result<Packet, Box<dyn std::error::Error>> {
    let data = serialize(request)?;
    socket.send_to(&data, server_addr).await?;

    let mut buf = [0u8; 2048];
    let (len, _) = socket.recv_from(&mut buf).await?;

    Ok(deserialize::<Packet>(&buf[0..len])?)
}

fn expect_view(response: Packet) -> Result<GameView, Box<dyn std::error::Error>> {
    match response {
        Packet::GameState(view) => Ok(view),
        Packet::Rejected { reason } => Err(format!("Request rejected: {}", reason).into()),
        other => Err(format!("Unexpected packet: {:?}", other).into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create local socket
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    println!("Client socket bound to {}", socket.local_addr()?);

    // Server address
    let server_addr = "127.0.0.1:8080".parse::<SocketAddr>()?;

    println!("Requesting a new game from {}", server_addr);
    let mut view = expect_view(send_request(&socket, server_addr, &Packet::StartGame).await?)?;

    println!(
        "Session {} started on a {}x{} board:",
        view.id, view.dimension, view.dimension
    );
    println!("{}", render_grid(&view.grid, view.dimension));

    // Play the automated strategy against the server until the board is
    // one color.
    let palette = Palette::new(view.colors.clone())?;
    let mut moves = 0;

    while !view.game_over && moves < MAX_MOVES {
        let color = select_next_color(&view.grid, view.dimension, &palette);
        println!("\nMove {}: painting {}", moves + 1, color);

        let request = Packet::NextMove {
            game_id: view.id,
            color,
        };
        view = expect_view(send_request(&socket, server_addr, &request).await?)?;
        println!("{}", render_grid(&view.grid, view.dimension));

        moves += 1;
    }

    if view.game_over {
        println!(
            "\nGame over after {} moves (opponent made {}).",
            view.move_history.len(),
            view.ai_move_history.len()
        );
    } else {
        println!("\nGiving up after {} moves.", moves);
    }

    Ok(())
}
