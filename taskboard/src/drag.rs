//! Drag-and-drop interaction state machine
//!
//! Tracks at most one dragged card plus which lists are highlighted as drop
//! targets. Highlights are presentation only; the board is never read or
//! written on their behalf.

use crate::command::Command;
use crate::store::BoardStore;
use crate::types::{CardId, ListId};
use std::collections::BTreeSet;

/// Where the pointer gesture currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A card is being dragged
    Dragging(CardId),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    highlighted: BTreeSet<ListId>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The card carrying the "being dragged" marker, if any
    pub fn dragging(&self) -> Option<&CardId> {
        match &self.state {
            DragState::Dragging(card) => Some(card),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self, card: &CardId) -> bool {
        self.dragging() == Some(card)
    }

    pub fn is_highlighted(&self, list: &ListId) -> bool {
        self.highlighted.contains(list)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &ListId> {
        self.highlighted.iter()
    }

    /// Start dragging `card`. Starting again mid-drag replaces the source.
    pub fn drag_start(&mut self, card: CardId) {
        if let DragState::Dragging(previous) = &self.state {
            tracing::debug!(%previous, %card, "drag restarted, replacing source");
        } else {
            tracing::debug!(%card, "drag started");
        }
        self.state = DragState::Dragging(card);
    }

    /// Pointer entered a list's drop zone
    pub fn drag_enter(&mut self, list: ListId) {
        self.highlighted.insert(list);
    }

    /// Pointer is moving over a list's drop zone
    pub fn drag_over(&mut self, list: ListId) {
        self.highlighted.insert(list);
    }

    /// Pointer left a list's drop zone
    pub fn drag_leave(&mut self, list: &ListId) {
        self.highlighted.remove(list);
    }

    /// Card released over `target`.
    ///
    /// Returns the move to perform when the dragged card still exists and
    /// lives in a different list; otherwise nothing. Either way the
    /// controller is back to idle with no highlights afterwards.
    pub fn drop(&mut self, target: &ListId, store: &BoardStore) -> Option<Command> {
        let state = std::mem::take(&mut self.state);
        self.highlighted.clear();

        let DragState::Dragging(card) = state else {
            tracing::debug!(%target, "drop without an active drag ignored");
            return None;
        };

        let Some(source) = store.find_list_containing(&card) else {
            tracing::debug!(%card, "dragged card no longer on the board");
            return None;
        };

        if &source == target {
            tracing::debug!(%card, %target, "dropped onto own list");
            return None;
        }

        Some(Command::MoveCard {
            card,
            from: source,
            to: target.clone(),
        })
    }

    /// Drag finished or cancelled without a drop
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
        self.highlighted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn store() -> BoardStore {
        BoardStore::new(Board::default_board())
    }

    #[test]
    fn test_starts_idle() {
        let drag = DragController::new();
        assert_eq!(drag.state(), &DragState::Idle);
        assert!(drag.dragging().is_none());
    }

    #[test]
    fn test_drag_start_marks_card() {
        let mut drag = DragController::new();
        drag.drag_start("c1".into());
        assert!(drag.is_dragging(&"c1".into()));
        assert!(!drag.is_dragging(&"c2".into()));
    }

    #[test]
    fn test_highlight_enter_and_leave() {
        let mut drag = DragController::new();
        drag.drag_start("c1".into());
        drag.drag_enter("doing".into());
        drag.drag_over("done".into());
        assert!(drag.is_highlighted(&"doing".into()));
        assert!(drag.is_highlighted(&"done".into()));

        drag.drag_leave(&"doing".into());
        assert!(!drag.is_highlighted(&"doing".into()));
        // highlight changes never touch the drag state
        assert!(drag.is_dragging(&"c1".into()));
    }

    #[test]
    fn test_drop_on_other_list_produces_move() {
        let store = store();
        let mut drag = DragController::new();
        drag.drag_start("c1".into());
        drag.drag_enter("doing".into());

        let command = drag.drop(&"doing".into(), &store);
        assert_eq!(
            command,
            Some(Command::MoveCard {
                card: "c1".into(),
                from: "todo".into(),
                to: "doing".into(),
            })
        );
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(drag.highlighted().count(), 0);
    }

    #[test]
    fn test_drop_on_own_list_does_nothing() {
        let store = store();
        let mut drag = DragController::new();
        drag.drag_start("c2".into());
        drag.drag_enter("todo".into());

        assert!(drag.drop(&"todo".into(), &store).is_none());
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(drag.highlighted().count(), 0);
    }

    #[test]
    fn test_drop_without_drag() {
        let store = store();
        let mut drag = DragController::new();
        drag.drag_enter("done".into());

        assert!(drag.drop(&"done".into(), &store).is_none());
        assert!(!drag.is_highlighted(&"done".into()));
    }

    #[test]
    fn test_drop_of_deleted_card() {
        let mut store = store();
        let mut drag = DragController::new();
        drag.drag_start("c4".into());
        store.delete_card(&"c4".into()).unwrap();

        assert!(drag.drop(&"todo".into(), &store).is_none());
    }

    #[test]
    fn test_second_drag_start_replaces_source() {
        let store = store();
        let mut drag = DragController::new();
        drag.drag_start("c1".into());
        drag.drag_start("c3".into());

        let command = drag.drop(&"done".into(), &store).unwrap();
        assert_eq!(
            command,
            Command::MoveCard {
                card: "c3".into(),
                from: "doing".into(),
                to: "done".into(),
            }
        );
    }

    #[test]
    fn test_drag_end_resets() {
        let mut drag = DragController::new();
        drag.drag_start("c1".into());
        drag.drag_enter("done".into());
        drag.drag_end();

        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(drag.highlighted().count(), 0);
    }
}
