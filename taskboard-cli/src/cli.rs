//! Command line definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Task board: lists of cards, moved around by dragging
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about)]
pub struct Cli {
    /// Directory holding the board file (defaults to $TASKBOARD_DIR, then the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Print the board as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the board
    Show,

    /// Append a new list
    AddList {
        /// List title
        title: String,
    },

    /// Append a card to a list
    AddCard {
        /// Id of the receiving list
        list: String,
        /// Card text
        text: String,
    },

    /// Drag a card onto another list
    Move {
        /// Id of the card to move
        card: String,
        /// Id of the destination list
        list: String,
    },

    /// Delete a card
    Delete {
        /// Id of the card to delete
        card: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Replace the board with the default lists and cards
    Reset,
}
