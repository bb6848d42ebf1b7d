//! Pure board transitions.
//!
//! # Responsibility
//! - Map `(previous board, action)` to the next board value.
//! - Re-validate user input (trimmed titles/text) below the UI layer.
//!
//! # Invariants
//! - The previous board is never mutated.
//! - `None` means the action is a no-op: blank input or unresolved ids.
//! - Fresh ids come only from the injected `IdGenerator`.

use crate::model::board::{Board, Card, CardId, Comment, List, ListId};
use crate::model::ids::{Clock, IdGenerator};
use log::warn;

const MAX_ID_ATTEMPTS: usize = 16;

/// One store-level board transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    AddList {
        title: String,
    },
    AddCard {
        list_id: ListId,
        title: String,
    },
    DeleteList {
        list_id: ListId,
    },
    ClearCards {
        list_id: ListId,
    },
    AddComment {
        list_id: ListId,
        card_id: CardId,
        text: String,
    },
    /// Wholesale replacement, used for drag commits and resets.
    Replace(Board),
}

impl BoardAction {
    /// Stable action name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddList { .. } => "add_list",
            Self::AddCard { .. } => "add_card",
            Self::DeleteList { .. } => "delete_list",
            Self::ClearCards { .. } => "clear_cards",
            Self::AddComment { .. } => "add_comment",
            Self::Replace(_) => "replace",
        }
    }
}

/// Applies `action` to `board`.
pub fn reduce(
    board: &Board,
    action: BoardAction,
    ids: &mut dyn IdGenerator,
    clock: &dyn Clock,
) -> Option<Board> {
    match action {
        BoardAction::AddList { title } => {
            let title = normalize_text(&title)?;
            let mut next = board.clone();
            next.lists.push(List::new(fresh_id(board, ids)?, title));
            Some(next)
        }
        BoardAction::AddCard { list_id, title } => {
            let title = normalize_text(&title)?;
            let list_index = board.list_index(&list_id)?;
            let card_id = fresh_id(board, ids)?;
            let mut next = board.clone();
            next.lists[list_index].cards.push(Card::new(card_id, title));
            Some(next)
        }
        BoardAction::DeleteList { list_id } => {
            let list_index = board.list_index(&list_id)?;
            let mut next = board.clone();
            next.lists.remove(list_index);
            Some(next)
        }
        BoardAction::ClearCards { list_id } => {
            let list_index = board.list_index(&list_id)?;
            if board.lists[list_index].cards.is_empty() {
                return None;
            }
            let mut next = board.clone();
            next.lists[list_index].cards.clear();
            Some(next)
        }
        BoardAction::AddComment {
            list_id,
            card_id,
            text,
        } => {
            let text = normalize_text(&text)?;
            let list_index = board.list_index(&list_id)?;
            let card_index = board.lists[list_index].card_index(&card_id)?;
            let comment = Comment {
                id: fresh_id(board, ids)?,
                text,
                timestamp: clock.now_formatted(),
            };
            let mut next = board.clone();
            next.lists[list_index].cards[card_index]
                .comments
                .push(comment);
            Some(next)
        }
        BoardAction::Replace(replacement) => {
            if replacement == *board {
                None
            } else {
                Some(replacement)
            }
        }
    }
}

/// Draws ids until one is unused anywhere on `board`.
fn fresh_id(board: &Board, ids: &mut dyn IdGenerator) -> Option<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.next_id();
        if !id_in_use(board, &candidate) {
            return Some(candidate);
        }
    }
    warn!("event=id_generate module=store status=error reason=exhausted attempts={MAX_ID_ATTEMPTS}");
    None
}

fn id_in_use(board: &Board, id: &str) -> bool {
    board.lists.iter().any(|list| {
        list.id == id
            || list.cards.iter().any(|card| {
                card.id == id || card.comments.iter().any(|comment| comment.id == id)
            })
    })
}

fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
