//! Board state store.
//!
//! # Responsibility
//! - Hold the current board and apply reducer transitions to it.
//! - Persist every changed board to the injected key-value store.
//! - Restore the board from a persisted snapshot at startup.
//!
//! # Invariants
//! - Store operations never fail; no-ops report `false`.
//! - Persistence failures are logged and never roll back in-memory state.
//! - Malformed or absent snapshots fall back to the seed board.
//! - Loading never writes to storage.

use crate::config::BoardConfig;
use crate::model::board::Board;
use crate::model::ids::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::model::seed::seed_board;
use crate::repo::kv_repo::KeyValueStore;
use crate::service::board_reducer::{reduce, BoardAction};
use log::{debug, error, info, warn};

/// Where the store's initial board came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSource {
    /// Decoded from a valid persisted snapshot.
    Snapshot,
    /// Seed board; no usable snapshot was found.
    Seed,
}

/// Canonical board holder with write-through persistence.
pub struct BoardStore<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    board: Board,
    source: BoardSource,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Loads the board using uuid ids and the system clock.
    pub fn load(storage: S, config: &BoardConfig) -> Self {
        Self::load_with(
            storage,
            config.storage_key.as_str(),
            Box::new(UuidGenerator),
            Box::new(SystemClock),
        )
    }

    /// Loads the board with explicit id/time collaborators.
    pub fn load_with(
        storage: S,
        storage_key: impl Into<String>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let storage_key = storage_key.into();
        let (board, source) = load_board(&storage, &storage_key);
        Self {
            storage,
            storage_key,
            board,
            source,
            ids,
            clock,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> BoardSource {
        self.source
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_list(&mut self, title: &str) -> bool {
        self.dispatch(BoardAction::AddList {
            title: title.to_string(),
        })
    }

    pub fn add_card(&mut self, list_id: &str, title: &str) -> bool {
        self.dispatch(BoardAction::AddCard {
            list_id: list_id.to_string(),
            title: title.to_string(),
        })
    }

    /// Removes a list together with its cards and comments.
    pub fn delete_list(&mut self, list_id: &str) -> bool {
        self.dispatch(BoardAction::DeleteList {
            list_id: list_id.to_string(),
        })
    }

    pub fn clear_cards(&mut self, list_id: &str) -> bool {
        self.dispatch(BoardAction::ClearCards {
            list_id: list_id.to_string(),
        })
    }

    pub fn add_comment(&mut self, list_id: &str, card_id: &str, text: &str) -> bool {
        self.dispatch(BoardAction::AddComment {
            list_id: list_id.to_string(),
            card_id: card_id.to_string(),
            text: text.to_string(),
        })
    }

    /// Replaces the whole board, e.g. with a drag preview or drop result.
    pub fn replace(&mut self, board: Board) -> bool {
        self.dispatch(BoardAction::Replace(board))
    }

    /// Commits an optional drag engine result.
    pub fn commit(&mut self, next: Option<Board>) -> bool {
        match next {
            Some(board) => self.replace(board),
            None => false,
        }
    }

    /// Applies one transition; returns whether the board changed.
    pub fn dispatch(&mut self, action: BoardAction) -> bool {
        let name = action.name();
        match reduce(&self.board, action, &mut *self.ids, &*self.clock) {
            Some(next) => {
                self.board = next;
                debug!(
                    "event=board_update module=store status=ok action={name} lists={} cards={}",
                    self.board.len(),
                    self.board.card_count()
                );
                self.persist();
                true
            }
            None => {
                debug!("event=board_update module=store status=noop action={name}");
                false
            }
        }
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.board) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=board_persist module=store status=error error_code=serialize_failed error={err}"
                );
                return;
            }
        };
        match self.storage.set(&self.storage_key, &payload) {
            Ok(()) => debug!(
                "event=board_persist module=store status=ok bytes={}",
                payload.len()
            ),
            Err(err) => error!(
                "event=board_persist module=store status=error error_code=storage_write_failed error={err}"
            ),
        }
    }
}

/// Reads and validates the persisted board, falling back to the seed.
pub fn load_board<S: KeyValueStore + ?Sized>(
    storage: &S,
    storage_key: &str,
) -> (Board, BoardSource) {
    let raw = match storage.get(storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=board_load module=store status=ok source=seed reason=absent");
            return (seed_board(), BoardSource::Seed);
        }
        Err(err) => {
            warn!(
                "event=board_load module=store status=error source=seed error_code=storage_read_failed error={err}"
            );
            return (seed_board(), BoardSource::Seed);
        }
    };

    let board: Board = match serde_json::from_str(&raw) {
        Ok(board) => board,
        Err(err) => {
            warn!(
                "event=board_load module=store status=error source=seed error_code=snapshot_malformed error={err}"
            );
            return (seed_board(), BoardSource::Seed);
        }
    };

    if let Err(err) = board.validate() {
        warn!(
            "event=board_load module=store status=error source=seed error_code=snapshot_invalid error={err}"
        );
        return (seed_board(), BoardSource::Seed);
    }

    info!(
        "event=board_load module=store status=ok source=snapshot lists={} cards={}",
        board.len(),
        board.card_count()
    );
    (board, BoardSource::Snapshot)
}
