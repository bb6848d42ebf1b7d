//! Core logic for the Kanban board.
//! This crate owns board state transitions, drag reordering and persistence.

pub mod config;
pub mod db;
pub mod drag;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use config::{BoardConfig, ConfigError, STORAGE_KEY};
pub use drag::collision::{detect_collision, Droppable, Point, Rect};
pub use drag::engine::{AbandonPolicy, DragEngine, DragOver, DragPayload, DragSubject};
pub use drag::reorder::{array_move, HoverGeometry};
pub use drag::DragKind;
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::board::{Board, BoardValidationError, Card, Comment, List};
pub use model::ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use model::seed::seed_board;
pub use repo::kv_repo::{
    KeyValueStore, KvRepoError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore,
};
pub use service::board_reducer::BoardAction;
pub use service::board_store::{BoardSource, BoardStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
