//! BoardStore - the canonical in-memory board and its mutations
//!
//! Every mutation validates first and only then touches the board, so a
//! failed call leaves the state exactly as it was.

use crate::error::{BoardError, Result};
use crate::types::{Board, Card, CardId, List, ListId};

/// Owns the board plus the "which list gets the next card" selector used by
/// the card creation dialog.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
    pending_card_target: Option<ListId>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            pending_card_target: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new empty list. A blank title changes nothing.
    pub fn create_list(&mut self, title: &str) -> Result<ListId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::blank("title"));
        }

        let list = List::new(title);
        let id = list.id.clone();
        self.board.lists.push(list);
        Ok(id)
    }

    /// Append a new card to the end of `list`
    pub fn create_card(&mut self, list: &ListId, text: &str) -> Result<CardId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::blank("text"));
        }
        let target = self
            .board
            .list_mut(list)
            .ok_or_else(|| BoardError::ListNotFound { id: list.to_string() })?;

        let card = Card::new(text);
        let id = card.id.clone();
        target.cards.push(card);
        Ok(id)
    }

    /// The id of the list that owns `card`, if any
    pub fn find_list_containing(&self, card: &CardId) -> Option<ListId> {
        self.board.find_list_containing(card).map(|l| l.id.clone())
    }

    /// Move `card` from `from` to the end of `to`.
    ///
    /// Returns `false` without touching anything when `from == to`:
    /// reordering inside a list is not supported.
    pub fn move_card(&mut self, card: &CardId, from: &ListId, to: &ListId) -> Result<bool> {
        let from_index = self
            .board
            .list_index(from)
            .ok_or_else(|| BoardError::ListNotFound { id: from.to_string() })?;
        let card_index = self.board.lists[from_index]
            .position_of(card)
            .ok_or_else(|| BoardError::CardNotFound { id: card.to_string() })?;
        let to_index = self
            .board
            .list_index(to)
            .ok_or_else(|| BoardError::ListNotFound { id: to.to_string() })?;

        if from_index == to_index {
            return Ok(false);
        }

        let moved = self.board.lists[from_index].cards.remove(card_index);
        self.board.lists[to_index].cards.push(moved);
        Ok(true)
    }

    /// Remove `card` from whichever list owns it, returning the removed card
    pub fn delete_card(&mut self, card: &CardId) -> Result<Card> {
        let owner = self
            .find_list_containing(card)
            .ok_or_else(|| BoardError::CardNotFound { id: card.to_string() })?;
        let list = self
            .board
            .list_mut(&owner)
            .ok_or_else(|| BoardError::ListNotFound { id: owner.to_string() })?;
        let index = list
            .position_of(card)
            .ok_or_else(|| BoardError::CardNotFound { id: card.to_string() })?;
        Ok(list.cards.remove(index))
    }

    // =========================================================================
    // Pending card target
    // =========================================================================

    /// Remember which list the card being composed will land in
    pub fn begin_card_creation(&mut self, list: &ListId) -> Result<()> {
        if self.board.list(list).is_none() {
            return Err(BoardError::ListNotFound { id: list.to_string() });
        }
        self.pending_card_target = Some(list.clone());
        Ok(())
    }

    pub fn pending_card_target(&self) -> Option<&ListId> {
        self.pending_card_target.as_ref()
    }

    /// Forget the pending target (dialog committed or cancelled)
    pub fn clear_card_creation(&mut self) -> Option<ListId> {
        self.pending_card_target.take()
    }
}

impl From<Board> for BoardStore {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
