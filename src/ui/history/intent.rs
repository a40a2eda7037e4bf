use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryIntent {
    FocusNext { entry_count: usize },
    FocusPrev,
    /// Keep the cursor inside a history that may have shrunk.
    Clamp { entry_count: usize },
    BeginEdit { comment_id: String, markdown: String },
    InsertChar(char),
    InsertText(String),
    Backspace,
    CancelEdit,
    SubmitEdit,
    RequestDelete { comment_id: String },
    DismissDelete,
    ConfirmDelete,
}

impl Intent for HistoryIntent {}
