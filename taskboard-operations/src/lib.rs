//! # Taskboard Operations
//!
//! Every board mutation is an operation: a struct whose fields ARE the
//! parameters, tagged with a verb and a noun.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct AddCard {
//!     pub list: ListId,
//!     pub text: String,
//! }
//!
//! impl Operation for AddCard {
//!     fn verb(&self) -> &'static str { "add" }
//!     fn noun(&self) -> &'static str { "card" }
//!     fn description(&self) -> &'static str { "Append a card to a list" }
//! }
//!
//! impl Execute<BoardStore, BoardError> for AddCard {
//!     fn execute(&self, store: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
//!         // returns ExecutionResult::Logged, Unlogged or Failed
//!     }
//! }
//! ```
//!
//! Execution is synchronous: an operation runs to completion before the
//! next input event is looked at.

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

pub use serde_json::Value;
