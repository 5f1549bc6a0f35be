//! Core types for the board engine

mod board;
mod ids;

// Re-export all types
pub use board::{Board, Card, List};
pub use ids::{CardId, ListId};
