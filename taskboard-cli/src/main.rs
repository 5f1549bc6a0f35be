//! taskboard - manage a task board from the terminal
//!
//! Commands:
//! - `taskboard show`: Print every list with its cards
//! - `taskboard add-list <title>`: Append a list
//! - `taskboard add-card <list> <text>`: Append a card to a list
//! - `taskboard move <card> <list>`: Drag a card onto another list
//! - `taskboard delete <card>`: Delete a card (asks first unless `--yes`)
//! - `taskboard reset`: Restore the default board
//!
//! Environment variables:
//! - TASKBOARD_DIR: Directory holding the board file
//! - RUST_LOG: Log filter (defaults to `warn`)
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
