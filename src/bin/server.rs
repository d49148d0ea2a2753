//! Corkboard Server Binary
//!
//! Starts the iterative TCP message-board server.

use clap::Parser;
use corkboard::network::Server;
use corkboard::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Corkboard Server
#[derive(Parser, Debug)]
#[command(name = "corkboard-server")]
#[command(about = "Minimal message-board server over a raw TCP text protocol")]
#[command(version)]
struct Args {
    /// Port to listen on (binds all interfaces)
    #[arg(short, long)]
    port: u16,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,corkboard=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("Corkboard Server v{}", corkboard::VERSION);

    let config = Config::builder()
        .listen_addr(format!("0.0.0.0:{}", args.port))
        .build();

    let server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    // Transport failures and structural store violations land here; there
    // is no recovery path, the process exits.
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
