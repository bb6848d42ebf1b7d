//! Per-gesture drag state machine.
//!
//! # Responsibility
//! - Track the active drag payload between gesture start and end.
//! - Translate hover and drop notifications into new board values.
//!
//! # Invariants
//! - `Idle -> Dragging` only on a resolvable subject.
//! - Hover previews only move cards across lists; same-list index moves
//!   happen once, on drop.
//! - A drop on the target the last hover preview already placed the card
//!   for applies nothing further.
//! - Every `drop`/`cancel` returns the engine to `Idle`.
//! - Column gestures never resolve to card-level targets.
//! - Returned boards are complete replacements; `None` means keep the board.

use crate::drag::reorder::{move_card, move_card_across, reorder_lists, HoverGeometry};
use crate::drag::DragKind;
use crate::model::board::{Board, Card, CardId, List, ListId};
use log::{debug, warn};
use serde::Deserialize;

/// What to do with committed previews when a gesture ends without a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonPolicy {
    /// Leave the last preview on the board.
    #[default]
    KeepPreview,
    /// Restore the board captured at gesture start.
    Rollback,
}

/// Entity the rendering layer reports at gesture start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    Column(ListId),
    Card(CardId),
}

/// Snapshot of the dragged entity used to render the floating overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Whole list, cards included, for a miniature column overlay.
    Column { list: List },
    Card { card: Card, list_id: ListId },
}

impl DragPayload {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column { .. } => DragKind::Column,
            Self::Card { .. } => DragKind::Card,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Column { list } => list.id.as_str(),
            Self::Card { card, .. } => card.id.as_str(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Column { list } => list.title.as_str(),
            Self::Card { card, .. } => card.title.as_str(),
        }
    }

    /// Cards carried by a column overlay; `None` for card drags.
    pub fn card_count(&self) -> Option<usize> {
        match self {
            Self::Column { list } => Some(list.cards.len()),
            Self::Card { .. } => None,
        }
    }
}

/// One hover/drop notification: target id plus pointer geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOver {
    pub over_id: String,
    pub geometry: HoverGeometry,
}

impl DragOver {
    pub fn new(over_id: impl Into<String>) -> Self {
        Self {
            over_id: over_id.into(),
            geometry: HoverGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: HoverGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

#[derive(Debug, Clone)]
enum DragState {
    Idle,
    Dragging {
        payload: DragPayload,
        origin: Board,
        /// Hover target whose cross-list preview is on the board.
        settled_over: Option<String>,
    },
}

/// Drag gesture state machine.
#[derive(Debug, Clone)]
pub struct DragEngine {
    policy: AbandonPolicy,
    state: DragState,
}

impl Default for DragEngine {
    fn default() -> Self {
        Self::new(AbandonPolicy::default())
    }
}

impl DragEngine {
    pub fn new(policy: AbandonPolicy) -> Self {
        Self {
            policy,
            state: DragState::Idle,
        }
    }

    pub fn policy(&self) -> AbandonPolicy {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Payload of the gesture in progress.
    pub fn active(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { payload, .. } => Some(payload),
        }
    }

    /// Starts a gesture and returns the overlay payload.
    ///
    /// Unknown subjects leave the engine idle. Starting while a gesture is
    /// already active replaces it.
    pub fn start(&mut self, board: &Board, subject: DragSubject) -> Option<&DragPayload> {
        if let DragState::Dragging { payload, .. } = &self.state {
            warn!(
                "event=drag_start module=drag status=replaced previous_id={}",
                payload.id()
            );
        }

        let payload = match &subject {
            DragSubject::Column(list_id) => board
                .find_list(list_id)
                .map(|list| DragPayload::Column { list: list.clone() }),
            DragSubject::Card(card_id) => {
                board.find_card(card_id).map(|(list, card)| DragPayload::Card {
                    card: card.clone(),
                    list_id: list.id.clone(),
                })
            }
        };

        let Some(payload) = payload else {
            debug!("event=drag_start module=drag status=ignored reason=unresolved_subject");
            self.state = DragState::Idle;
            return None;
        };

        debug!(
            "event=drag_start module=drag status=ok kind={:?} id={}",
            payload.kind(),
            payload.id()
        );
        self.state = DragState::Dragging {
            payload,
            origin: board.clone(),
            settled_over: None,
        };
        self.active()
    }

    /// Computes the live preview for a hover-target change.
    ///
    /// Card drags preview cross-list moves only; column drags reorder lists.
    pub fn hover(&mut self, board: &Board, over: &DragOver) -> Option<Board> {
        let DragState::Dragging {
            payload,
            settled_over,
            ..
        } = &mut self.state
        else {
            return None;
        };
        let next = match &*payload {
            DragPayload::Column { list } => {
                if board.find_list(&over.over_id).is_none() {
                    return None;
                }
                reorder_lists(board, &list.id, &over.over_id)
            }
            DragPayload::Card { card, .. } => {
                let next = move_card_across(board, &card.id, &over.over_id, over.geometry);
                if next.is_some() {
                    *settled_over = Some(over.over_id.clone());
                } else if settled_over.as_deref() != Some(over.over_id.as_str()) {
                    *settled_over = None;
                }
                next
            }
        };
        if next.is_some() {
            debug!(
                "event=drag_hover module=drag status=preview id={} over={}",
                payload.id(),
                over.over_id
            );
        }
        next
    }

    /// Ends the gesture, committing the final reorder when there is one.
    ///
    /// Same-list card drops are a single index move. Cross-list drops not
    /// already previewed by `hover` are applied here.
    ///
    /// `over = None` abandons the gesture and applies the [`AbandonPolicy`].
    pub fn drop(&mut self, board: &Board, over: Option<&DragOver>) -> Option<Board> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging {
            payload,
            origin,
            settled_over,
        } = state
        else {
            return None;
        };

        let Some(over) = over else {
            debug!(
                "event=drag_end module=drag status=abandoned id={} policy={:?}",
                payload.id(),
                self.policy
            );
            return self.abandon(board, origin);
        };

        match payload {
            DragPayload::Column { .. } => None,
            DragPayload::Card { card, .. } => {
                if settled_over.as_deref() == Some(over.over_id.as_str()) {
                    debug!(
                        "event=drag_end module=drag status=ok id={} over={} changed=false reason=previewed",
                        card.id, over.over_id
                    );
                    return None;
                }
                let next = move_card(board, &card.id, &over.over_id, over.geometry);
                debug!(
                    "event=drag_end module=drag status=ok id={} over={} changed={}",
                    card.id,
                    over.over_id,
                    next.is_some()
                );
                next
            }
        }
    }

    /// Abandons the gesture in progress.
    pub fn cancel(&mut self, board: &Board) -> Option<Board> {
        self.drop(board, None)
    }

    fn abandon(&self, board: &Board, origin: Board) -> Option<Board> {
        match self.policy {
            AbandonPolicy::KeepPreview => None,
            AbandonPolicy::Rollback if origin != *board => Some(origin),
            AbandonPolicy::Rollback => None,
        }
    }
}
