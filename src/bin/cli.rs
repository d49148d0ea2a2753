//! Corkboard CLI Client
//!
//! Turns command-line invocations into protocol requests and renders the
//! response: head section to stderr, body to stdout. Exits zero only for
//! status 200/201.

use std::io::{self, Write};

use bytes::Bytes;
use clap::{Parser, Subcommand};
use corkboard::network::Client;
use corkboard::protocol::{Method, Request, Target};
use corkboard::store::MAX_BOARD_NAME;
use corkboard::{Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Corkboard CLI
#[derive(Parser, Debug)]
#[command(name = "corkboard-cli")]
#[command(about = "CLI client for the Corkboard message-board server")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long)]
    host: String,

    /// Server port
    #[arg(short, long)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all boards (newest first)
    Boards,

    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardAction,
    },

    /// Post operations on a board
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
}

#[derive(Subcommand, Debug)]
enum BoardAction {
    /// Create a board
    Add {
        #[arg(value_parser = parse_board_name)]
        name: String,
    },

    /// Delete a board with all of its posts
    Delete {
        #[arg(value_parser = parse_board_name)]
        name: String,
    },

    /// List a board's posts
    List {
        #[arg(value_parser = parse_board_name)]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum ItemAction {
    /// Add a post to a board
    Add {
        #[arg(value_parser = parse_board_name)]
        name: String,
        content: String,
    },

    /// Delete a post by its display id
    Delete {
        #[arg(value_parser = parse_board_name)]
        name: String,
        id: u64,
    },

    /// Replace a post's content
    Update {
        #[arg(value_parser = parse_board_name)]
        name: String,
        id: u64,
        content: String,
    },
}

/// Board names are validated before any network I/O: alphanumeric bytes
/// only, and short enough that the server never hits its structural limit.
fn parse_board_name(s: &str) -> std::result::Result<String, String> {
    if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err("board names may only contain alphanumeric characters".to_string());
    }
    if s.len() > MAX_BOARD_NAME {
        return Err(format!("board names are at most {MAX_BOARD_NAME} bytes"));
    }
    Ok(s.to_string())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    match run(args) {
        Ok(success) => {
            if !success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Perform the single request/response exchange. `Ok(false)` means the
/// server answered with something other than 200/201.
fn run(args: Args) -> Result<bool> {
    let request = build_request(&args.command);

    let config = Config::default();
    let mut client = Client::connect(&args.host, args.port, &config)?;
    let (response, raw) = client.send(&request)?;

    // Head section (everything before the body bytes) to stderr, body to
    // stdout, exactly as received.
    let body_len = response.body.as_ref().map(|b| b.len()).unwrap_or(0);
    let head_len = raw.len().saturating_sub(body_len + 2);
    io::stderr().write_all(&raw[..head_len])?;
    if let Some(body) = &response.body {
        io::stdout().write_all(body)?;
    }

    Ok(response.status.is_success())
}

/// Map a CLI command onto a protocol request
fn build_request(command: &Commands) -> Request {
    match command {
        Commands::Boards => Request::new(Method::Get, Target::Boards { name: None }, None),

        Commands::Board { action } => match action {
            BoardAction::Add { name } => Request::new(
                Method::Post,
                Target::Boards {
                    name: Some(name.clone()),
                },
                None,
            ),
            BoardAction::Delete { name } => Request::new(
                Method::Delete,
                Target::Boards {
                    name: Some(name.clone()),
                },
                None,
            ),
            BoardAction::List { name } => Request::new(
                Method::Get,
                Target::Board {
                    name: name.clone(),
                    id: None,
                },
                None,
            ),
        },

        Commands::Item { action } => match action {
            ItemAction::Add { name, content } => Request::new(
                Method::Post,
                Target::Board {
                    name: name.clone(),
                    id: None,
                },
                Some(Bytes::copy_from_slice(content.as_bytes())),
            ),
            ItemAction::Delete { name, id } => Request::new(
                Method::Delete,
                Target::Board {
                    name: name.clone(),
                    id: Some(*id),
                },
                None,
            ),
            ItemAction::Update { name, id, content } => Request::new(
                Method::Put,
                Target::Board {
                    name: name.clone(),
                    id: Some(*id),
                },
                Some(Bytes::copy_from_slice(content.as_bytes())),
            ),
        },
    }
}
