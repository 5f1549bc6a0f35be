//! Board-level types: Board, List, Card

use super::ids::{CardId, ListId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single text task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Create a card with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            text: text.into(),
        }
    }

    /// Create a card with a known id
    pub fn with_id(id: impl Into<CardId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A named, ordered bucket of cards. Card order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create an empty list with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Create an empty list with a known id
    pub fn with_id(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Append cards (builder style, used for seed data)
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Number of cards, always read from the sequence itself
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a card within this list
    pub fn position_of(&self, card: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card)
    }

    pub fn contains(&self, card: &CardId) -> bool {
        self.position_of(card).is_some()
    }
}

/// The whole board: an ordered sequence of lists.
///
/// Serializes as a bare JSON array of lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub(crate) lists: Vec<List>,
}

impl Board {
    /// An empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from lists, rejecting duplicate ids
    pub fn from_lists(lists: Vec<List>) -> Result<Self> {
        let board = Self { lists };
        board.validate()?;
        Ok(board)
    }

    /// The board shown on first start: To Do, Doing and Done with a few seed cards
    pub fn default_board() -> Self {
        Self {
            lists: vec![
                List::with_id("todo", "To Do").with_cards([
                    Card::with_id("c1", "Learn the framework basics"),
                    Card::with_id("c2", "Write the project docs"),
                ]),
                List::with_id("doing", "Doing")
                    .with_cards([Card::with_id("c3", "Build the board features")]),
                List::with_id("done", "Done")
                    .with_cards([Card::with_id("c4", "Gather requirements")]),
            ],
        }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Find a list by id
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    pub(crate) fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == id)
    }

    pub(crate) fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// The list that currently owns `card`
    pub fn find_list_containing(&self, card: &CardId) -> Option<&List> {
        self.lists.iter().find(|l| l.contains(card))
    }

    /// Look up a card anywhere on the board
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|l| l.cards.iter())
            .find(|c| &c.id == id)
    }

    /// Every card id on the board, in list then card order
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.lists.iter().flat_map(|l| l.cards.iter().map(|c| &c.id))
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::card_count).sum()
    }

    /// Check the structural invariants: unique list ids and every card in
    /// exactly one place.
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(BoardError::invalid_input(
                    "lists",
                    format!("duplicate list id {}", list.id),
                ));
            }
        }

        let mut card_ids = HashSet::new();
        for id in self.card_ids() {
            if !card_ids.insert(id) {
                return Err(BoardError::invalid_input(
                    "cards",
                    format!("card {} appears more than once", id),
                ));
            }
        }
        Ok(())
    }
}
