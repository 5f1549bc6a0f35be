//! Typed commands produced by UI events
//!
//! Interaction code never touches the store directly: it produces one of
//! these, and the session runs it through the processor.

use crate::card::{AddCard, DeleteCard, MoveCard};
use crate::error::Result;
use crate::list::AddList;
use crate::processor::{BoardOperationProcessor, Processed};
use crate::store::BoardStore;
use crate::types::{CardId, ListId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateList { title: String },
    CreateCard { list: ListId, text: String },
    MoveCard { card: CardId, from: ListId, to: ListId },
    DeleteCard { card: CardId },
}

impl Command {
    /// Canonical "verb noun" name of the operation this command runs
    pub fn op_string(&self) -> &'static str {
        match self {
            Self::CreateList { .. } => "add list",
            Self::CreateCard { .. } => "add card",
            Self::MoveCard { .. } => "move card",
            Self::DeleteCard { .. } => "delete card",
        }
    }

    /// Run the matching operation against `store`
    pub fn apply(
        &self,
        processor: &mut BoardOperationProcessor,
        store: &mut BoardStore,
    ) -> Result<Processed> {
        match self {
            Self::CreateList { title } => processor.run(&AddList::new(title.as_str()), store),
            Self::CreateCard { list, text } => {
                processor.run(&AddCard::new(list.clone(), text.as_str()), store)
            }
            Self::MoveCard { card, from, to } => {
                processor.run(&MoveCard::new(card.clone(), from.clone(), to.clone()), store)
            }
            Self::DeleteCard { card } => processor.run(&DeleteCard::new(card.clone()), store),
        }
    }
}
