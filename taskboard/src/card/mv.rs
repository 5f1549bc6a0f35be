//! MoveCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{CardId, ListId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation};

/// Move a card from one list to the end of another
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveCard {
    /// The card to move
    pub id: CardId,
    /// The list currently owning the card
    pub from: ListId,
    /// The destination list
    pub to: ListId,
}

impl MoveCard {
    pub fn new(id: impl Into<CardId>, from: impl Into<ListId>, to: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    fn apply(&self, store: &mut BoardStore) -> Result<bool> {
        store.move_card(&self.id, &self.from, &self.to)
    }
}

impl Operation for MoveCard {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Move a card to the end of a different list"
    }
}

impl Execute<BoardStore, BoardError> for MoveCard {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result = self.apply(store);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(moved) => {
                let list = if moved { &self.to } else { &self.from };
                let value = json!({
                    "id": &self.id,
                    "list": list,
                    "moved": moved,
                });
                if moved {
                    ExecutionResult::Logged {
                        value: value.clone(),
                        log_entry: LogEntry::new(
                            self.op_string(),
                            input,
                            value,
                            None,
                            duration_ms,
                        ),
                    }
                } else {
                    // same-list drop: nothing changed, nothing to record
                    ExecutionResult::Unlogged { value }
                }
            }
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
    fn test_move_card_to_list() {
        let mut store = setup();

        let result = MoveCard::new("c1", "todo", "doing").execute(&mut store);
        assert!(result.is_mutation());
        let value = result.into_result().unwrap();

        assert_eq!(value["list"], "doing");
        assert_eq!(value["moved"], true);
        let doing = store.board().list(&ListId::from_string("doing")).unwrap();
        assert_eq!(doing.cards.last().unwrap().id.as_str(), "c1");
    }

    #[test]
    fn test_move_card_same_list_unlogged() {
        let mut store = setup();
        let before = store.board().clone();

        let result = MoveCard::new("c2", "todo", "todo").execute(&mut store);
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap()["moved"], false);
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_move_card_invalid_list() {
        let mut store = setup();

        let result = MoveCard::new("c1", "todo", "nonexistent")
            .execute(&mut store)
            .into_result();

        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }
}
