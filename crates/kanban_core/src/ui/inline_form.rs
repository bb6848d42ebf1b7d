//! Inline "add list"/"add card" form state.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineForm {
    open: bool,
    draft: String,
}

impl InlineForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Returns the trimmed draft and resets the form, or `None` for a blank draft.
    ///
    /// A blank submit keeps the form open so the user can keep typing.
    pub fn submit(&mut self) -> Option<String> {
        let value = self.draft.trim();
        if value.is_empty() {
            return None;
        }
        let value = value.to_string();
        self.cancel();
        Some(value)
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.draft.clear();
    }
}
