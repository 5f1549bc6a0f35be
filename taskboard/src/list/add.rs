//! AddList command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation};

/// Append a new empty list to the end of the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddList {
    /// The list title (trimmed; must not be blank)
    pub title: String,
}

impl AddList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn apply(&self, store: &mut BoardStore) -> Result<Value> {
        let id = store.create_list(&self.title)?;
        let list = store
            .board()
            .list(&id)
            .ok_or_else(|| BoardError::ListNotFound { id: id.to_string() })?;
        Ok(serde_json::to_value(list)?)
    }
}

impl Operation for AddList {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "Append a new list to the board"
    }
}

impl Execute<BoardStore, BoardError> for AddList {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn setup() -> BoardStore {
        BoardStore::new(Board::default_board())
    }

    #[test]
    fn test_add_list() {
        let mut store = setup();

        let result = AddList::new("Blocked")
            .execute(&mut store)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Blocked");
        assert_eq!(result["cards"], json!([]));
        assert_eq!(store.board().list_count(), 4);
        assert_eq!(store.board().lists()[3].id.as_str(), result["id"]);
    }

    #[test]
    fn test_add_list_blank_title() {
        let mut store = setup();

        let result = AddList::new("  ").execute(&mut store);
        assert!(!result.is_mutation());
        assert!(result.should_log());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::InvalidInput { .. })
        ));
        assert_eq!(store.board().list_count(), 3);
    }
}
