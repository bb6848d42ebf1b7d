//! Board domain model shared by the store and the drag engine.
//!
//! # Responsibility
//! - Define the canonical Board -> List -> Card -> Comment tree.
//! - Provide lookup helpers used by store transitions and drag resolution.
//! - Supply id/time collaborators and the fixed seed board.
//!
//! # Invariants
//! - List ids and card ids are unique across one board.
//! - The tree is strictly owned: no card is shared between lists.

pub mod board;
pub mod ids;
pub mod seed;
