//! Fixed seed board used when no valid snapshot is persisted.

use crate::model::board::{Board, Card, List};

/// Returns the initial demo board.
pub fn seed_board() -> Board {
    Board::new(vec![
        List::new("1", "Todo").with_cards(vec![
            Card::new("c1", "Create interview Kanban"),
            Card::new("c2", "Review Drag & Drop"),
        ]),
        List::new("2", "In Progress").with_cards(vec![Card::new("c3", "Set up Next.js project")]),
        List::new("3", "Done"),
    ])
}
