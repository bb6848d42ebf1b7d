//! Pure board reordering algorithms behind drag gestures.
//!
//! # Responsibility
//! - Move cards within one list, move cards across lists, move lists.
//! - Produce a whole new `Board` per step, never a partial one.
//!
//! # Invariants
//! - `None` means "no change": unresolved ids and same-slot moves included.
//! - Every card stays in exactly one list in every produced board.
//! - Insertion indices are clamped to `[0, len]`.

use crate::drag::collision::Rect;
use crate::model::board::{Board, List};

/// Pointer geometry captured with a hover event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverGeometry {
    /// Dragged item's translated rectangle.
    pub active_rect: Option<Rect>,
    /// Hovered target's rectangle.
    pub over_rect: Option<Rect>,
}

impl HoverGeometry {
    pub fn new(active_rect: Rect, over_rect: Rect) -> Self {
        Self {
            active_rect: Some(active_rect),
            over_rect: Some(over_rect),
        }
    }

    /// True once the dragged item's top edge has passed the target's bottom edge.
    pub fn is_below_target(&self) -> bool {
        match (self.active_rect, self.over_rect) {
            (Some(active), Some(over)) => active.top > over.top + over.height,
            _ => false,
        }
    }
}

/// Moves the element at `from` to `to`, shifting everything in between.
///
/// `to` past the end appends. Out-of-range `from` returns the input unchanged.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}

/// Reorders cards inside `list_id`, moving `active_id` to the slot of `over_id`.
pub fn reorder_cards_within(
    board: &Board,
    list_id: &str,
    active_id: &str,
    over_id: &str,
) -> Option<Board> {
    let list_index = board.list_index(list_id)?;
    let list = &board.lists[list_index];
    let old_index = list.card_index(active_id)?;
    let new_index = list.card_index(over_id)?;
    if old_index == new_index {
        return None;
    }

    let mut next = board.clone();
    next.lists[list_index].cards = array_move(&list.cards, old_index, new_index);
    Some(next)
}

/// Reorders lists on the board, moving `active_list_id` to the slot of `over_list_id`.
pub fn reorder_lists(board: &Board, active_list_id: &str, over_list_id: &str) -> Option<Board> {
    let old_index = board.list_index(active_list_id)?;
    let new_index = board.list_index(over_list_id)?;
    if old_index == new_index {
        return None;
    }
    Some(Board::new(array_move(&board.lists, old_index, new_index)))
}

/// Moves card `active_id` to the slot of `over_id`, wherever that is.
///
/// Same-list targets become a within-list index move; other targets go
/// through [`move_card_across`].
pub fn move_card(
    board: &Board,
    active_id: &str,
    over_id: &str,
    geometry: HoverGeometry,
) -> Option<Board> {
    let (source, _) = board.find_card(active_id)?;
    let source_id = source.id.as_str();
    let target_id = board.container_of(over_id)?;
    if source_id == target_id {
        return reorder_cards_within(board, source_id, active_id, over_id);
    }
    move_card_across(board, active_id, over_id, geometry)
}

/// Moves card `active_id` out of its list into the list owning `over_id`.
///
/// The card is spliced in at the end when `over_id` is the list itself,
/// else at the hovered card's index, one slot later when
/// [`HoverGeometry::is_below_target`] holds. Same-list targets yield `None`.
pub fn move_card_across(
    board: &Board,
    active_id: &str,
    over_id: &str,
    geometry: HoverGeometry,
) -> Option<Board> {
    let (source, _) = board.find_card(active_id)?;
    let source_id = source.id.as_str();
    let target_id = board.container_of(over_id)?;
    if source_id == target_id {
        return None;
    }

    let source_index = board.list_index(source_id)?;
    let target_index = board.list_index(target_id)?;
    let source = &board.lists[source_index];
    let target = &board.lists[target_index];
    let card_index = source.card_index(active_id)?;

    let requested = if board.find_list(over_id).is_some() {
        target.cards.len()
    } else {
        match target.card_index(over_id) {
            Some(over_index) => over_index + usize::from(geometry.is_below_target()),
            None => target.cards.len(),
        }
    };
    let insert_at = requested.min(target.cards.len());

    let mut shrunk = source.cards.clone();
    let card = shrunk.remove(card_index);
    let mut grown = target.cards.clone();
    grown.insert(insert_at, card);

    let lists = board
        .lists
        .iter()
        .enumerate()
        .map(|(index, list)| {
            if index == source_index {
                List {
                    cards: shrunk.clone(),
                    ..list.clone()
                }
            } else if index == target_index {
                List {
                    cards: grown.clone(),
                    ..list.clone()
                }
            } else {
                list.clone()
            }
        })
        .collect();
    Some(Board::new(lists))
}
