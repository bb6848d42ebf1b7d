use kanban_core::{
    Board, BoardSource, BoardStore, Card, FixedClock, KeyValueStore, KvRepoError, KvResult, List,
    MemoryKeyValueStore, SequentialIds, STORAGE_KEY,
};

fn store_over(storage: &MemoryKeyValueStore) -> BoardStore<&MemoryKeyValueStore> {
    BoardStore::load_with(
        storage,
        STORAGE_KEY,
        Box::new(SequentialIds::new("id-")),
        Box::new(FixedClock("03/07/2024, 03:04 PM".to_string())),
    )
}

fn persisted(storage: &MemoryKeyValueStore) -> Board {
    let raw = storage.get(STORAGE_KEY).unwrap().expect("snapshot persisted");
    serde_json::from_str(&raw).unwrap()
}

/// Rejects every write; reads see nothing.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> KvResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        Err(KvRepoError::QuotaExceeded {
            key: key.to_string(),
            required_bytes: value.len(),
            capacity_bytes: 0,
        })
    }
}

#[test]
fn add_list_appends_empty_list_and_persists() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    let before = store.board().len();

    assert!(store.add_list("  Review  "));

    let board = store.board();
    assert_eq!(board.len(), before + 1);
    let added = board.lists.last().unwrap();
    assert_eq!(added.title, "Review");
    assert!(added.cards.is_empty());
    assert_eq!(persisted(&storage), *board);
}

#[test]
fn blank_inputs_leave_board_unchanged_and_skip_persistence() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    let before = store.board().clone();

    assert!(!store.add_list("   "));
    assert!(!store.add_card("1", "\t"));
    assert!(!store.add_comment("1", "c1", " \n "));

    assert_eq!(*store.board(), before);
    assert!(storage.is_empty());
}

#[test]
fn unknown_ids_are_no_ops() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    let before = store.board().clone();

    assert!(!store.add_card("missing", "Card"));
    assert!(!store.delete_list("missing"));
    assert!(!store.clear_cards("missing"));
    assert!(!store.add_comment("1", "missing", "text"));
    assert!(!store.add_comment("missing", "c1", "text"));

    assert_eq!(*store.board(), before);
}

#[test]
fn add_card_appends_to_matching_list_only() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);

    assert!(store.add_card("3", " Ship release "));

    let done = store.board().find_list("3").unwrap();
    assert_eq!(done.cards.len(), 1);
    assert_eq!(done.cards[0].title, "Ship release");
    assert!(done.cards[0].comments.is_empty());
    assert_eq!(store.board().find_list("1").unwrap().cards.len(), 2);
}

#[test]
fn delete_list_removes_only_target_and_keeps_order() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    let before = store.board().clone();

    assert!(store.delete_list("2"));

    let board = store.board();
    assert_eq!(board.lists, vec![before.lists[0].clone(), before.lists[2].clone()]);
}

#[test]
fn clear_cards_keeps_identity_and_other_lists() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    let before = store.board().clone();

    assert!(store.clear_cards("1"));

    let board = store.board();
    assert_eq!(board.lists[0].id, "1");
    assert_eq!(board.lists[0].title, "Todo");
    assert!(board.lists[0].cards.is_empty());
    assert_eq!(board.lists[1..], before.lists[1..]);
}

#[test]
fn add_comment_records_text_and_timestamp() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);

    assert!(store.add_comment("2", "c3", "  lgtm "));

    let (_, card) = store.board().find_card("c3").unwrap();
    assert_eq!(card.comments.len(), 1);
    assert_eq!(card.comments[0].text, "lgtm");
    assert_eq!(card.comments[0].timestamp, "03/07/2024, 03:04 PM");
    assert!(!card.comments[0].id.is_empty());
}

#[test]
fn persisted_snapshot_is_restored_on_next_load() {
    let storage = MemoryKeyValueStore::new();
    {
        let mut store = store_over(&storage);
        store.add_list("Backlog");
        store.add_comment("1", "c1", "first");
    }

    let restored = store_over(&storage);
    assert_eq!(restored.source(), BoardSource::Snapshot);
    assert_eq!(restored.board().len(), 4);
    assert_eq!(restored.board().lists[3].title, "Backlog");
    let (_, card) = restored.board().find_card("c1").unwrap();
    assert_eq!(card.comments[0].text, "first");
}

#[test]
fn malformed_snapshot_falls_back_to_seed() {
    let storage = MemoryKeyValueStore::new();
    storage.set(STORAGE_KEY, "{not json").unwrap();

    let store = store_over(&storage);
    assert_eq!(store.source(), BoardSource::Seed);
    assert_eq!(*store.board(), kanban_core::seed_board());
}

#[test]
fn snapshot_with_duplicate_card_ids_falls_back_to_seed() {
    let storage = MemoryKeyValueStore::new();
    let invalid = Board::new(vec![
        List::new("a", "A").with_cards(vec![Card::new("x", "one")]),
        List::new("b", "B").with_cards(vec![Card::new("x", "two")]),
    ]);
    storage
        .set(STORAGE_KEY, &serde_json::to_string(&invalid).unwrap())
        .unwrap();

    let store = store_over(&storage);
    assert_eq!(store.source(), BoardSource::Seed);
}

#[test]
fn snapshot_with_overlapping_list_and_card_ids_is_restored() {
    let storage = MemoryKeyValueStore::new();
    let raw = r#"[
        {"id":"1","title":"Todo","cards":[{"id":"1","title":"Mine"},{"id":"2","title":"Other"}]},
        {"id":"2","title":"Done","cards":[]}
    ]"#;
    storage.set(STORAGE_KEY, raw).unwrap();

    let mut store = store_over(&storage);
    assert_eq!(store.source(), BoardSource::Snapshot);
    assert_eq!(store.board().lists[0].cards[0].title, "Mine");

    assert!(store.add_comment("1", "1", "kept"));
    assert_eq!(persisted(&storage), *store.board());
    assert_eq!(persisted(&storage).lists[0].cards[0].comments[0].text, "kept");
}

#[test]
fn persistence_failure_keeps_in_memory_state() {
    let mut store = BoardStore::load_with(
        UnavailableStore,
        STORAGE_KEY,
        Box::new(SequentialIds::new("id-")),
        Box::new(FixedClock("now".to_string())),
    );

    assert!(store.add_list("Offline"));
    assert!(store.add_card("1", "Still works"));
    assert_eq!(store.board().lists.last().unwrap().title, "Offline");
    assert_eq!(store.board().find_list("1").unwrap().cards.len(), 3);
}

#[test]
fn quota_exceeded_write_leaves_previous_snapshot() {
    let storage = MemoryKeyValueStore::with_capacity_limit(600);
    let mut store = store_over(&storage);
    assert!(store.add_list("Small"));
    let saved = persisted(&storage);

    let huge = "x".repeat(1_000);
    assert!(store.add_card("1", &huge));

    assert_eq!(persisted(&storage), saved);
    assert_eq!(store.board().find_list("1").unwrap().cards.len(), 3);
}

#[test]
fn serialized_board_round_trips() {
    let storage = MemoryKeyValueStore::new();
    let mut store = store_over(&storage);
    store.add_comment("1", "c2", "needs review");

    let json = serde_json::to_value(store.board()).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["cards"][1]["comments"][0]["text"], "needs review");

    let decoded: Board = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, *store.board());
}
