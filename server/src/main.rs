use clap::Parser;
use server::config::GameConfig;
use server::network::Server;
use shared::default_colors;

/// Main-method of the application.
/// Parses command-line arguments, validates the game configuration, then
/// runs the UDP game server until interrupted.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value = "8080")]
        port: u16,
        /// Side length of the game board
        #[clap(short, long, default_value = "5")]
        dimension: usize,
        /// Maximum number of concurrently tracked sessions
        #[clap(short, long, default_value = "10")]
        games_limit: usize,
    }

    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Configuration errors are fatal at startup
    let config = GameConfig::new(default_colors(), args.dimension, args.games_limit)?;

    let address = format!("{}:{}", args.host, args.port);
    let mut server = Server::new(&address, config).await?;

    // Handle shutdown gracefully
    tokio::select! {
        result = server.run() => result,
        _ = tokio::signal::ctrl_c() => {
            println!("Received Ctrl+C, shutting down gracefully...");
            Ok(())
        }
    }
}
