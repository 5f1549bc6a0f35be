//! AddCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation};

/// Append a new card to the end of a list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddCard {
    /// The list receiving the card
    pub list: ListId,
    /// The card text (trimmed; must not be blank)
    pub text: String,
}

impl AddCard {
    pub fn new(list: impl Into<ListId>, text: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            text: text.into(),
        }
    }

    fn apply(&self, store: &mut BoardStore) -> Result<Value> {
        let id = store.create_card(&self.list, &self.text)?;
        let card = store
            .board()
            .card(&id)
            .ok_or_else(|| BoardError::CardNotFound { id: id.to_string() })?;

        let mut result = serde_json::to_value(card)?;
        result["list"] = json!(&self.list);
        Ok(result)
    }
}

impl Operation for AddCard {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Append a new card to a list"
    }
}

impl Execute<BoardStore, BoardError> for AddCard {
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
