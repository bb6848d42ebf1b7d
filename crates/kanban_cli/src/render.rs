//! Plain-text board rendering for terminal output.

use kanban_core::Board;
use std::fmt::Write;

/// Renders lists left to right as stacked sections.
///
/// Each list prints as `[id] Title (card count)`, followed by its cards and
/// their comments indented beneath it.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    if board.is_empty() {
        out.push_str("(no lists)\n");
        return out;
    }

    for list in &board.lists {
        let _ = writeln!(out, "[{}] {} ({})", list.id, list.title, list.cards.len());
        for card in &list.cards {
            let _ = writeln!(out, "  - [{}] {}", card.id, card.title);
            for comment in &card.comments {
                let _ = writeln!(out, "      {}: {}", comment.timestamp, comment.text);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::board_text;
    use kanban_core::{seed_board, Board, Comment};

    #[test]
    fn renders_lists_cards_and_comments() {
        let mut board = seed_board();
        board.lists[0].cards[0].comments.push(Comment {
            id: "m1".to_string(),
            text: "started".to_string(),
            timestamp: "03/07/2024, 03:04 PM".to_string(),
        });

        let text = board_text(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[1] Todo (2)");
        assert_eq!(lines[1], "  - [c1] Create interview Kanban");
        assert_eq!(lines[2], "      03/07/2024, 03:04 PM: started");
        assert!(text.contains("[3] Done (0)"));
    }

    #[test]
    fn empty_board_has_placeholder() {
        assert_eq!(board_text(&Board::default()), "(no lists)\n");
    }
}
