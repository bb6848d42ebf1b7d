//! Per-list action menu state.
//!
//! The menu owns its open/closed flag. Interactions outside the menu are
//! delivered by the host through [`ListMenu::outside_interaction`] instead of
//! a process-wide listener.

/// Entries shown while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMenuItem {
    DeleteList,
    DeleteAllCards,
}

/// Store operation requested through the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMenuAction {
    DeleteList { list_id: String },
    ClearCards { list_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMenu {
    list_id: String,
    open: bool,
}

impl ListMenu {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu; a no-op when already closed.
    pub fn outside_interaction(&mut self) {
        self.open = false;
    }

    /// Selects an entry. Closes the menu and yields the action only while open.
    pub fn choose(&mut self, item: ListMenuItem) -> Option<ListMenuAction> {
        if !self.open {
            return None;
        }
        self.open = false;
        let list_id = self.list_id.clone();
        Some(match item {
            ListMenuItem::DeleteList => ListMenuAction::DeleteList { list_id },
            ListMenuItem::DeleteAllCards => ListMenuAction::ClearCards { list_id },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ListMenu, ListMenuAction, ListMenuItem};

    #[test]
    fn choose_requires_open_menu() {
        let mut menu = ListMenu::new("todo");
        assert_eq!(menu.choose(ListMenuItem::DeleteList), None);

        menu.toggle();
        assert_eq!(
            menu.choose(ListMenuItem::DeleteAllCards),
            Some(ListMenuAction::ClearCards {
                list_id: "todo".to_string()
            })
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_interaction_closes() {
        let mut menu = ListMenu::new("todo");
        menu.toggle();
        menu.outside_interaction();
        assert!(!menu.is_open());
        menu.outside_interaction();
        assert!(!menu.is_open());
    }
}
