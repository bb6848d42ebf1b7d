//! Board use-case services.
//!
//! # Responsibility
//! - Express board transitions as pure reducer steps.
//! - Orchestrate transitions with persistence in the board store.

pub mod board_reducer;
pub mod board_store;
