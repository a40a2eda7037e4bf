use crate::ui::mvi::UiState;

/// Comment being edited and the text typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub comment_id: String,
    pub text: String,
}

/// Transient selection state of the history panel.
///
/// Created empty when the panel is built and never persisted. `editing`
/// and `pending_delete` are independent singletons: at most one edit
/// modal and one delete confirmation exist at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelSelectionState {
    /// Index of the focused entry.
    pub cursor: usize,
    pub editing: Option<EditDraft>,
    pub pending_delete: Option<String>,
}

impl UiState for PanelSelectionState {}

impl PanelSelectionState {
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|draft| draft.comment_id.as_str())
    }

    pub fn pending_delete_id(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Neither an edit nor a delete confirmation is open.
    pub fn is_idle(&self) -> bool {
        self.editing.is_none() && self.pending_delete.is_none()
    }
}
