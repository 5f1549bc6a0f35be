//! Task board engine
//!
//! An ordered set of named lists, each holding an ordered set of text cards.
//! Cards are created, dragged between lists and deleted; after every change
//! the whole board is rendered and saved as a single JSON document.
//!
//! ## Overview
//!
//! - **Board store** - owns the board, every mutation is all-or-nothing
//! - **Operations** - each mutation is a typed, logged operation
//! - **Drag controller** - turns drag gestures into move commands
//! - **Session** - maps UI events to commands, then renders and saves
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{BoardConfig, BoardSession, TextRenderer, UiEvent};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::resolve(None);
//! let mut session = BoardSession::open(config.storage(), TextRenderer::stdout())?;
//!
//! // Drag card c1 onto the "doing" list
//! session.handle(UiEvent::DragStart("c1".into()))?;
//! session.handle(UiEvent::DragEnter("doing".into()))?;
//! session.handle(UiEvent::Drop("doing".into()))?;
//! session.handle(UiEvent::DragEnd)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage
//!
//! ```text
//! <data dir>/
//! └── kanban-data.json    # [{"id", "title", "cards": [{"id", "text"}]}]
//! ```

mod command;
mod config;
mod dialog;
mod drag;
mod error;
mod processor;
mod render;
mod session;
mod storage;
mod store;
pub mod types;

// Command modules
pub mod card;
pub mod list;

pub use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use command::Command;
pub use config::{BoardConfig, DIR_ENV_VAR};
pub use dialog::{DialogAction, DialogKind, DialogSurface, Key};
pub use drag::{DragController, DragState};
pub use error::{BoardError, Result};
pub use processor::{BoardOperationProcessor, Processed, DEFAULT_ACTIVITY_CAPACITY};
pub use render::{format_board, NullRenderer, Renderer, TextRenderer, EMPTY_LIST_HINT};
pub use session::{BoardSession, UiEvent};
pub use storage::{load_or_default, BoardStorage, FileStorage, MemoryStorage, STORAGE_KEY};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{Board, Card, CardId, List, ListId};
