//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the board store persists through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository APIs surface storage failures as typed errors; callers decide
//!   whether they are fatal.

pub mod kv_repo;
