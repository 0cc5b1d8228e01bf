//! nogo-gtp Server Binary
//!
//! Runs a GTP session over stdin/stdout. Diagnostics go to stderr: stdout
//! carries protocol frames and must stay clean.

use std::io;

use clap::Parser;
use nogo_gtp::{Config, FirstMoveEngine, GtpConnection, SimpleBoard};
use tracing_subscriber::{fmt, EnvFilter};

/// NoGo GTP engine
#[derive(Parser, Debug)]
#[command(name = "nogo-gtp")]
#[command(about = "GTP session handler for the NoGo rule variant")]
#[command(version)]
struct Args {
    /// Initial board size
    #[arg(short, long, default_value = "7")]
    size: usize,

    /// Enable diagnostic output on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging on stderr only
    let default_filter = if args.debug { "nogo_gtp=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    tracing::debug!("nogo-gtp v{}", nogo_gtp::VERSION);

    let config = Config::builder()
        .board_size(args.size)
        .debug_mode(args.debug)
        .build();

    let board = match SimpleBoard::new(config.board_size) {
        Ok(board) => board,
        Err(e) => {
            tracing::error!("Failed to create board: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut connection = GtpConnection::new(
        FirstMoveEngine::new(),
        board,
        stdout.lock(),
        config.debug_mode,
    );

    if let Err(e) = connection.run(stdin.lock()) {
        tracing::error!("Session terminated: {}", e);
        std::process::exit(1);
    }
}
