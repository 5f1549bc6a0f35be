//! BoardSession - wires input events to the store, renderer and storage
//!
//! The session owns every piece of mutable state (board, drag gesture,
//! dialogs, activity log). Each event runs to completion: translate to a
//! command, apply it, then render and save if the board changed.

use crate::command::Command;
use crate::dialog::{DialogAction, DialogKind, DialogSurface, Key};
use crate::drag::DragController;
use crate::error::{BoardError, Result};
use crate::processor::{BoardOperationProcessor, Processed};
use crate::render::Renderer;
use crate::storage::{load_or_default, BoardStorage};
use crate::store::BoardStore;
use crate::types::{Board, CardId, ListId};
use serde_json::Value;

/// Raw interaction events coming from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DragStart(CardId),
    DragEnter(ListId),
    DragOver(ListId),
    DragLeave(ListId),
    /// Card released over a list's drop zone
    Drop(ListId),
    DragEnd,
    /// "Add card" clicked on a list
    OpenCardDialog(ListId),
    /// "Add list" clicked
    OpenListDialog,
    /// Dialog text changed
    Input(String),
    Key(Key),
    /// Click on the dim area around an open dialog
    BackdropClick,
    /// Delete button clicked; `confirmed` is the user's answer to the prompt
    DeleteCard { card: CardId, confirmed: bool },
}

pub struct BoardSession<S, R> {
    store: BoardStore,
    drag: DragController,
    dialog: DialogSurface,
    processor: BoardOperationProcessor,
    storage: S,
    renderer: R,
}

impl<S: BoardStorage, R: Renderer> BoardSession<S, R> {
    /// Load the stored board (or the default one) and wire up collaborators.
    ///
    /// Fails only when a stored board exists but cannot be read.
    pub fn open(storage: S, renderer: R) -> Result<Self> {
        let board = load_or_default(&storage)?;
        tracing::debug!(
            lists = board.list_count(),
            cards = board.card_count(),
            "board session opened"
        );
        Ok(Self {
            store: BoardStore::new(board),
            drag: DragController::new(),
            dialog: DialogSurface::new(),
            processor: BoardOperationProcessor::new(),
            storage,
            renderer,
        })
    }

    pub fn with_processor(mut self, processor: BoardOperationProcessor) -> Self {
        self.processor = processor;
        self
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn dialog(&self) -> &DialogSurface {
        &self.dialog
    }

    pub fn processor(&self) -> &BoardOperationProcessor {
        &self.processor
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Paint the current board
    pub fn render(&mut self) {
        self.renderer.render(self.store.board());
    }

    /// Handle one UI event.
    ///
    /// Returns the operation's value when the event ran a command, `None`
    /// when it only changed interaction state.
    pub fn handle(&mut self, event: UiEvent) -> Result<Option<Value>> {
        tracing::trace!(?event, "ui event");
        match event {
            UiEvent::DragStart(card) => {
                self.drag.drag_start(card);
                Ok(None)
            }
            UiEvent::DragEnter(list) => {
                self.drag.drag_enter(list);
                Ok(None)
            }
            UiEvent::DragOver(list) => {
                self.drag.drag_over(list);
                Ok(None)
            }
            UiEvent::DragLeave(list) => {
                self.drag.drag_leave(&list);
                Ok(None)
            }
            UiEvent::Drop(target) => match self.drag.drop(&target, &self.store) {
                Some(command) => self.execute(command).map(Some),
                None => Ok(None),
            },
            UiEvent::DragEnd => {
                self.drag.drag_end();
                Ok(None)
            }
            UiEvent::OpenCardDialog(list) => {
                self.store
                    .begin_card_creation(&list)
                    .inspect_err(|error| tracing::error!(%error, "cannot open card dialog"))?;
                self.dialog.open(DialogKind::NewCard);
                Ok(None)
            }
            UiEvent::OpenListDialog => {
                self.store.clear_card_creation();
                self.dialog.open(DialogKind::NewList);
                Ok(None)
            }
            UiEvent::Input(text) => {
                self.dialog.set_input(text);
                Ok(None)
            }
            UiEvent::Key(key) => self.handle_key(key),
            UiEvent::BackdropClick => self.handle_key(Key::Escape),
            UiEvent::DeleteCard { card, confirmed } => {
                if !confirmed {
                    tracing::debug!(%card, "delete declined");
                    return Ok(None);
                }
                self.execute(Command::DeleteCard { card }).map(Some)
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Result<Option<Value>> {
        match self.dialog.handle_key(key) {
            DialogAction::Nothing => Ok(None),
            DialogAction::Cancelled(kind) => {
                tracing::debug!(?kind, "dialog cancelled");
                self.store.clear_card_creation();
                Ok(None)
            }
            DialogAction::Submit(DialogKind::NewList, title) => {
                let processed = self.apply(Command::CreateList { title })?;
                self.dialog.close();
                self.persist(&processed)?;
                Ok(Some(processed.value))
            }
            DialogAction::Submit(DialogKind::NewCard, text) => {
                let list = self.store.pending_card_target().cloned().ok_or_else(|| {
                    let error = BoardError::invalid_input("list", "no list selected for new card");
                    tracing::error!(%error, "card dialog open without a target list");
                    error
                })?;
                let processed = self.apply(Command::CreateCard { list, text })?;
                self.store.clear_card_creation();
                self.dialog.close();
                self.persist(&processed)?;
                Ok(Some(processed.value))
            }
        }
    }

    /// Apply a command; on change, render and then save the whole board
    pub fn execute(&mut self, command: Command) -> Result<Value> {
        let processed = self.apply(command)?;
        self.persist(&processed)?;
        Ok(processed.value)
    }

    /// Run a command against the store and render if it changed the board.
    /// Once this returns `Ok` the change is in memory whether or not the
    /// following save succeeds.
    fn apply(&mut self, command: Command) -> Result<Processed> {
        let processed = command
            .apply(&mut self.processor, &mut self.store)
            .inspect_err(|error| {
                tracing::error!(op = command.op_string(), %error, "command rejected");
            })?;

        if processed.mutated {
            self.render();
        }
        Ok(processed)
    }

    fn persist(&mut self, processed: &Processed) -> Result<()> {
        if !processed.mutated {
            return Ok(());
        }
        self.storage
            .save(self.store.board())
            .inspect_err(|error| tracing::error!(%error, "failed to save board"))
    }

    /// Replace the board with the default one and save it
    pub fn reset(&mut self) -> Result<()> {
        self.drag.drag_end();
        self.dialog.close();
        self.store = BoardStore::new(Board::default_board());
        tracing::info!("board reset to defaults");
        self.render();
        self.storage.save(self.store.board())
    }

    pub fn into_parts(self) -> (BoardStore, S, R) {
        (self.store, self.storage, self.renderer)
    }
}
