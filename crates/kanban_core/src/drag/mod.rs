//! Drag reorder engine.
//!
//! # Responsibility
//! - Turn drag gestures over lists and cards into board replacements.
//! - Decide gesture activation and drop-target resolution from geometry.
//!
//! # Invariants
//! - A card is removed from its source before it is spliced elsewhere.
//! - Unresolved ids at any step are benign no-ops.

pub mod collision;
pub mod engine;
pub mod reorder;
pub mod sensor;

/// Type tag of a draggable or droppable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// A whole list being reordered among lists.
    Column,
    /// A card being reordered within or across lists.
    Card,
}
