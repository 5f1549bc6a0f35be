//! FindCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult, Operation};

/// Look up which list owns a card
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FindCard {
    /// The card to look for
    pub id: CardId,
}

impl FindCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, store: &BoardStore) -> Result<Value> {
        let board = store.board();
        let list = board
            .find_list_containing(&self.id)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;
        let position = list.position_of(&self.id);

        Ok(json!({
            "id": &self.id,
            "list": &list.id,
            "position": position,
            "text": board.card(&self.id).map(|c| c.text.as_str()),
        }))
    }
}

impl Operation for FindCard {
    fn verb(&self) -> &'static str {
        "find"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Find the list that owns a card"
    }
}

impl Execute<BoardStore, BoardError> for FindCard {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        match self.apply(store) {
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(error) => ExecutionResult::Failed {
                error,
                log_entry: None,
            },
        }
    }
}
