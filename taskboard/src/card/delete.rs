//! DeleteCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation};

/// Delete a card from whichever list owns it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteCard {
    /// The card to delete
    pub id: CardId,
}

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, store: &mut BoardStore) -> Result<Value> {
        let owner = store.find_list_containing(&self.id);
        let card = store.delete_card(&self.id)?;

        let mut result = serde_json::to_value(&card)?;
        result["list"] = json!(owner);
        Ok(result)
    }
}

impl Operation for DeleteCard {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Delete a card from the board"
    }
}

impl Execute<BoardStore, BoardError> for DeleteCard {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result = self.apply(store);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(value) => ExecutionResult::Logged {
                value: value.clone(),
                log_entry: LogEntry::new(self.op_string(), input, value, None, duration_ms),
            },
            Err(error) => {
                let log_entry = LogEntry::failure(self.op_string(), input, &error, duration_ms);
                ExecutionResult::Failed {
                    error,
                    log_entry: Some(log_entry),
                }
            }
        }
    }
}
