//! Terminal front-end for the Kanban board.
//!
//! # Responsibility
//! - Open the persisted board and route subcommands to store operations.
//! - Replay drag gestures through the drag engine as start/hover/drop.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kanban_core::db::open_db;
use kanban_core::ui::inline_form::InlineForm;
use kanban_core::ui::list_menu::{ListMenu, ListMenuAction, ListMenuItem};
use kanban_core::{
    default_log_level, flush_logging, init_logging, seed_board, BoardConfig, BoardStore,
    DragEngine, DragOver, DragSubject, HoverGeometry, KeyValueStore, Rect, SqliteKeyValueStore,
};
use log::info;
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(version, about = "Local Kanban board with drag-and-drop reordering")]
pub struct Cli {
    /// SQLite file holding the board snapshot
    #[arg(long, global = true, default_value = "kanban.sqlite3")]
    pub db: PathBuf,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board
    Show {
        /// Print the persisted JSON shape instead
        #[arg(long)]
        json: bool,
    },
    /// Append a list
    AddList { title: String },
    /// Append a card to a list
    AddCard { list_id: String, title: String },
    /// Delete a list and everything in it
    DeleteList { list_id: String },
    /// Delete all cards in a list
    ClearCards { list_id: String },
    /// Comment on a card
    AddComment {
        list_id: String,
        card_id: String,
        text: String,
    },
    /// Drag a card over a list or another card and drop it there
    DragCard {
        card_id: String,
        over_id: String,
        /// Drop past the lower edge of the hovered card
        #[arg(long)]
        below: bool,
    },
    /// Drag a list onto another list's position
    DragList { list_id: String, over_id: String },
    /// Replace the board with the seed board
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BoardConfig::default(),
    };

    if let Some(log_dir) = &cli.log_dir {
        let level = config
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = absolute(log_dir)?;
        init_logging(&level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;
    }

    let outcome = execute(&cli, &config);
    flush_logging();
    outcome
}

fn execute(cli: &Cli, config: &BoardConfig) -> Result<()> {
    let conn = open_db(&cli.db).with_context(|| format!("opening {}", cli.db.display()))?;
    let storage = SqliteKeyValueStore::try_new(&conn).context("preparing board storage")?;
    let mut store = BoardStore::load(storage, config);
    info!(
        "event=cli_command module=cli status=start source={:?}",
        store.source()
    );

    run(&cli.command, &mut store, config)
}

fn run<S: KeyValueStore>(
    command: &Commands,
    store: &mut BoardStore<S>,
    config: &BoardConfig,
) -> Result<()> {
    match command {
        Commands::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(store.board())?);
            } else {
                print!("{}", render::board_text(store.board()));
            }
            return Ok(());
        }
        Commands::AddList { title } => {
            let changed = submit_form(title).is_some_and(|title| store.add_list(&title));
            report(changed, "list added", "nothing to add");
        }
        Commands::AddCard { list_id, title } => {
            let changed = submit_form(title).is_some_and(|title| store.add_card(list_id, &title));
            report(changed, "card added", "no such list or blank title");
        }
        Commands::DeleteList { list_id } => {
            let changed = menu_action(store, list_id, ListMenuItem::DeleteList);
            report(changed, "list deleted", "no such list");
        }
        Commands::ClearCards { list_id } => {
            let changed = menu_action(store, list_id, ListMenuItem::DeleteAllCards);
            report(changed, "cards deleted", "no such list or already empty");
        }
        Commands::AddComment {
            list_id,
            card_id,
            text,
        } => {
            let changed = store.add_comment(list_id, card_id, text);
            report(changed, "comment added", "no such card or blank comment");
        }
        Commands::DragCard {
            card_id,
            over_id,
            below,
        } => {
            let over = DragOver::new(over_id.as_str()).with_geometry(hover_geometry(*below));
            let changed = replay_gesture(store, config, DragSubject::Card(card_id.clone()), &over);
            report(changed, "card moved", "nothing to move");
        }
        Commands::DragList { list_id, over_id } => {
            let over = DragOver::new(over_id.as_str());
            let changed =
                replay_gesture(store, config, DragSubject::Column(list_id.clone()), &over);
            report(changed, "list moved", "nothing to move");
        }
        Commands::Reset => {
            let changed = store.replace(seed_board());
            report(changed, "board reset", "board already matches seed");
        }
    }
    print!("{}", render::board_text(store.board()));
    Ok(())
}

fn submit_form(value: &str) -> Option<String> {
    let mut form = InlineForm::new();
    form.open();
    form.set_draft(value);
    form.submit()
}

fn menu_action<S: KeyValueStore>(
    store: &mut BoardStore<S>,
    list_id: &str,
    item: ListMenuItem,
) -> bool {
    let mut menu = ListMenu::new(list_id);
    menu.toggle();
    match menu.choose(item) {
        Some(ListMenuAction::DeleteList { list_id }) => store.delete_list(&list_id),
        Some(ListMenuAction::ClearCards { list_id }) => store.clear_cards(&list_id),
        None => false,
    }
}

/// Runs start -> hover -> drop against the store, committing each step.
fn replay_gesture<S: KeyValueStore>(
    store: &mut BoardStore<S>,
    config: &BoardConfig,
    subject: DragSubject,
    over: &DragOver,
) -> bool {
    let mut engine = DragEngine::new(config.abandon_policy);
    if engine.start(store.board(), subject).is_none() {
        return false;
    }
    let previewed = store.commit(engine.hover(store.board(), over));
    let dropped = store.commit(engine.drop(store.board(), Some(over)));
    previewed || dropped
}

/// Places the dragged card either overlapping the target or past its lower edge.
fn hover_geometry(below: bool) -> HoverGeometry {
    let target = Rect::new(0.0, 0.0, 240.0, 48.0);
    let top = if below { target.bottom() + 1.0 } else { target.top };
    HoverGeometry::new(Rect::new(0.0, top, target.width, target.height), target)
}

fn report(changed: bool, done: &str, skipped: &str) {
    if changed {
        println!("{done}");
    } else {
        println!("unchanged: {skipped}");
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("resolving current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::{hover_geometry, menu_action, replay_gesture, submit_form};
    use kanban_core::ui::list_menu::ListMenuItem;
    use kanban_core::{
        BoardConfig, BoardStore, DragOver, DragSubject, FixedClock, MemoryKeyValueStore,
        SequentialIds, STORAGE_KEY,
    };

    fn store(storage: &MemoryKeyValueStore) -> BoardStore<&MemoryKeyValueStore> {
        BoardStore::load_with(
            storage,
            STORAGE_KEY,
            Box::new(SequentialIds::new("t")),
            Box::new(FixedClock("now".to_string())),
        )
    }

    #[test]
    fn blank_form_submission_is_rejected() {
        assert_eq!(submit_form("   "), None);
        assert_eq!(submit_form(" Plan ").as_deref(), Some("Plan"));
    }

    #[test]
    fn below_geometry_crosses_lower_edge() {
        assert!(hover_geometry(true).is_below_target());
        assert!(!hover_geometry(false).is_below_target());
    }

    #[test]
    fn menu_action_clears_cards() {
        let storage = MemoryKeyValueStore::new();
        let mut store = store(&storage);
        assert!(menu_action(&mut store, "1", ListMenuItem::DeleteAllCards));
        assert!(store.board().find_list("1").unwrap().cards.is_empty());
    }

    #[test]
    fn replayed_card_gesture_moves_across_lists() {
        let storage = MemoryKeyValueStore::new();
        let mut store = store(&storage);
        let moved = replay_gesture(
            &mut store,
            &BoardConfig::default(),
            DragSubject::Card("c1".to_string()),
            &DragOver::new("3"),
        );
        assert!(moved);
        let (owner, _) = store.board().find_card("c1").unwrap();
        assert_eq!(owner.id, "3");
    }

    #[test]
    fn replayed_card_gesture_reorders_within_list_once() {
        let storage = MemoryKeyValueStore::new();
        let mut store = store(&storage);
        let moved = replay_gesture(
            &mut store,
            &BoardConfig::default(),
            DragSubject::Card("c1".to_string()),
            &DragOver::new("c2").with_geometry(hover_geometry(false)),
        );
        assert!(moved);
        let todo: Vec<&str> = store
            .board()
            .find_list("1")
            .unwrap()
            .cards
            .iter()
            .map(|card| card.id.as_str())
            .collect();
        assert_eq!(todo, vec!["c2", "c1"]);
    }
}
