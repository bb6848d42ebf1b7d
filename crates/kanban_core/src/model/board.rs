//! Board domain model.
//!
//! # Responsibility
//! - Define the serializable board tree and its wire shape.
//! - Resolve ids to lists, cards and owning containers.
//! - Validate structural invariants of persisted snapshots.
//!
//! # Invariants
//! - `Board` serializes as a bare JSON array of lists.
//! - A card id resolves to at most one owning list.
//! - List ids and card ids are separate namespaces; on overlap, id
//!   resolution prefers the list.
//! - Missing `comments` in persisted cards decode as an empty sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable list identifier, unique within one board.
pub type ListId = String;
/// Stable card identifier, unique across the whole board.
pub type CardId = String;
/// Comment identifier.
pub type CommentId = String;

/// Append-only note attached to one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    /// Human-readable creation time, already formatted for display.
    pub timestamp: String,
}

/// Titled unit of work owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Card {
    /// Creates a card with no comments.
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            comments: Vec::new(),
        }
    }
}

/// Named, ordered column of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Creates a list with no cards.
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Builder-style helper used by seed data and tests.
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Returns the position of `card_id` within this list.
    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }
}

/// Full ordered collection of lists, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub lists: Vec<List>,
}

/// Structural problems found in a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardValidationError {
    /// A list id is blank.
    BlankListId,
    /// A card id is blank.
    BlankCardId { list_id: ListId },
    /// Two lists share one id.
    DuplicateListId(ListId),
    /// Two cards share one id.
    DuplicateCardId(CardId),
}

impl Display for BoardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankListId => write!(f, "list id must not be blank"),
            Self::BlankCardId { list_id } => {
                write!(f, "card id must not be blank (list {list_id})")
            }
            Self::DuplicateListId(id) => write!(f, "duplicate list id: {id}"),
            Self::DuplicateCardId(id) => write!(f, "duplicate card id: {id}"),
        }
    }
}

impl Error for BoardValidationError {}

impl Board {
    pub fn new(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns the list with `list_id`, if any.
    pub fn find_list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Returns the board position of `list_id`, if any.
    pub fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// Returns the card with `card_id` and the id of its owning list.
    pub fn find_card(&self, card_id: &str) -> Option<(&List, &Card)> {
        self.lists.iter().find_map(|list| {
            list.cards
                .iter()
                .find(|card| card.id == card_id)
                .map(|card| (list, card))
        })
    }

    /// Resolves the container that owns `id`.
    ///
    /// A list id resolves to itself; a card id resolves to its owning list.
    /// Returns `None` when `id` matches nothing.
    pub fn container_of(&self, id: &str) -> Option<&str> {
        if let Some(list) = self.find_list(id) {
            return Some(list.id.as_str());
        }
        self.find_card(id).map(|(list, _)| list.id.as_str())
    }

    /// Total number of cards across all lists.
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    /// Checks id uniqueness and non-blank ids across the whole tree.
    ///
    /// Uniqueness is checked per namespace; a card may reuse a list id.
    pub fn validate(&self) -> Result<(), BoardValidationError> {
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for list in &self.lists {
            if list.id.trim().is_empty() {
                return Err(BoardValidationError::BlankListId);
            }
            if !list_ids.insert(list.id.as_str()) {
                return Err(BoardValidationError::DuplicateListId(list.id.clone()));
            }
            for card in &list.cards {
                if card.id.trim().is_empty() {
                    return Err(BoardValidationError::BlankCardId {
                        list_id: list.id.clone(),
                    });
                }
                if !card_ids.insert(card.id.as_str()) {
                    return Err(BoardValidationError::DuplicateCardId(card.id.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardValidationError, Card, List};

    fn sample() -> Board {
        Board::new(vec![
            List::new("todo", "Todo").with_cards(vec![Card::new("a", "A"), Card::new("b", "B")]),
            List::new("doing", "Doing").with_cards(vec![Card::new("c", "C")]),
        ])
    }

    #[test]
    fn container_of_resolves_lists_and_cards() {
        let board = sample();
        assert_eq!(board.container_of("todo"), Some("todo"));
        assert_eq!(board.container_of("c"), Some("doing"));
        assert_eq!(board.container_of("missing"), None);
    }

    #[test]
    fn validate_rejects_duplicate_card_across_lists() {
        let mut board = sample();
        board.lists[1].cards.push(Card::new("a", "dup"));
        assert_eq!(
            board.validate(),
            Err(BoardValidationError::DuplicateCardId("a".to_string()))
        );
    }

    #[test]
    fn validate_rejects_duplicate_list_id() {
        let mut board = sample();
        board.lists.push(List::new("todo", "Again"));
        assert_eq!(
            board.validate(),
            Err(BoardValidationError::DuplicateListId("todo".to_string()))
        );
    }

    #[test]
    fn card_reusing_list_id_is_valid_and_resolves_to_list() {
        let mut board = sample();
        board.lists[0].cards.push(Card::new("doing", "overlap"));
        assert_eq!(board.validate(), Ok(()));
        assert_eq!(board.container_of("doing"), Some("doing"));
        assert_eq!(board.find_card("doing").unwrap().0.id, "todo");
    }

    #[test]
    fn card_without_comments_field_decodes() {
        let value = serde_json::json!([{ "id": "1", "title": "Todo", "cards": [{ "id": "9", "title": "x" }] }]);
        let board: Board = serde_json::from_value(value).unwrap();
        assert!(board.lists[0].cards[0].comments.is_empty());
    }
}
