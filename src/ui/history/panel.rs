//! The review history panel: entries, selection state and the sink that
//! receives finalized comment changes.

use crate::hotspot::{CommentView, HistoryEntry, HistoryProvider};
use crate::sink::ActionSink;
use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::reducer::HistoryReducer;
use crate::ui::history::state::PanelSelectionState;
use crate::ui::mvi::Reducer;

/// Renders an ordered history and manages the edit/delete interaction.
///
/// Selection state is cleared *before* the sink is called, so the panel is
/// idle again by the time a commit starts, whatever its outcome. The panel
/// never learns whether a commit succeeded; the host re-supplies history.
pub struct HistoryPanel<S> {
    entries: Vec<HistoryEntry>,
    state: PanelSelectionState,
    sink: S,
}

impl<S: ActionSink> HistoryPanel<S> {
    pub fn new(sink: S) -> Self {
        Self {
            entries: Vec::new(),
            state: PanelSelectionState::default(),
            sink,
        }
    }

    /// Replace the displayed entries with the provider's history of `subject`.
    ///
    /// The cursor is clamped. An open edit or delete confirmation survives
    /// only while its comment is still present and editable.
    pub fn set_history<P: HistoryProvider>(&mut self, provider: &P, subject: &P::Subject) {
        self.entries = provider.history(subject);
        tracing::debug!(entries = self.entries.len(), "History supplied");
        self.dispatch(HistoryIntent::Clamp {
            entry_count: self.entries.len(),
        });

        if self.is_stale(self.state.editing_id()) {
            tracing::debug!("Edit closed: comment no longer editable");
            self.dispatch(HistoryIntent::CancelEdit);
        }
        if self.is_stale(self.state.pending_delete_id()) {
            tracing::debug!("Delete closed: comment no longer editable");
            self.dispatch(HistoryIntent::DismissDelete);
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn state(&self) -> &PanelSelectionState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn focused(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.state.cursor)
    }

    /// Complete comment with the given id, if it is in the current history.
    pub fn comment(&self, comment_id: &str) -> Option<CommentView<'_>> {
        self.entries
            .iter()
            .filter_map(HistoryEntry::comment)
            .find(|comment| comment.comment_id == comment_id)
    }

    pub fn focus_next(&mut self) {
        self.dispatch(HistoryIntent::FocusNext {
            entry_count: self.entries.len(),
        });
    }

    pub fn focus_prev(&mut self) {
        self.dispatch(HistoryIntent::FocusPrev);
    }

    /// Open the edit surface for the focused entry.
    ///
    /// Returns `false` when the focused entry offers no edit affordance.
    pub fn edit_focused(&mut self) -> bool {
        let Some(id) = self.focused_editable_id() else {
            return false;
        };
        self.begin_edit(&id)
    }

    /// Ask for confirmation to delete the focused entry.
    pub fn delete_focused(&mut self) -> bool {
        let Some(id) = self.focused_editable_id() else {
            return false;
        };
        self.request_delete(&id)
    }

    /// Open the edit surface for a comment, pre-filled with its markdown.
    pub fn begin_edit(&mut self, comment_id: &str) -> bool {
        let Some(markdown) = self
            .editable_comment(comment_id)
            .map(|comment| comment.raw_markdown.to_string())
        else {
            tracing::debug!(comment = comment_id, "Edit ignored: no editable comment");
            return false;
        };
        self.dispatch(HistoryIntent::BeginEdit {
            comment_id: comment_id.to_string(),
            markdown,
        });
        true
    }

    pub fn request_delete(&mut self, comment_id: &str) -> bool {
        if self.editable_comment(comment_id).is_none() {
            tracing::debug!(comment = comment_id, "Delete ignored: no editable comment");
            return false;
        }
        self.dispatch(HistoryIntent::RequestDelete {
            comment_id: comment_id.to_string(),
        });
        true
    }

    pub fn type_char(&mut self, ch: char) {
        self.dispatch(HistoryIntent::InsertChar(ch));
    }

    pub fn paste(&mut self, text: impl Into<String>) {
        self.dispatch(HistoryIntent::InsertText(text.into()));
    }

    pub fn backspace(&mut self) {
        self.dispatch(HistoryIntent::Backspace);
    }

    /// Close the edit surface without committing.
    pub fn cancel_edit(&mut self) {
        self.dispatch(HistoryIntent::CancelEdit);
    }

    /// Close the edit surface, then commit the draft.
    ///
    /// Returns `false` (and commits nothing) when no edit is open or the
    /// draft is blank; a blank draft stays open.
    pub fn submit_edit(&mut self) -> bool {
        let Some(draft) = self.state.editing.clone() else {
            return false;
        };
        if draft.text.trim().is_empty() {
            tracing::debug!(comment = %draft.comment_id, "Submit ignored: empty comment");
            return false;
        }
        self.dispatch(HistoryIntent::SubmitEdit);
        self.sink.commit_edit(&draft.comment_id, draft.text);
        true
    }

    pub fn dismiss_delete(&mut self) {
        self.dispatch(HistoryIntent::DismissDelete);
    }

    /// Close the confirmation, then commit the deletion.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(comment_id) = self.state.pending_delete.clone() else {
            return false;
        };
        self.dispatch(HistoryIntent::ConfirmDelete);
        self.sink.commit_delete(&comment_id);
        true
    }

    fn focused_editable_id(&self) -> Option<String> {
        self.focused()
            .and_then(HistoryEntry::editable_comment)
            .map(|comment| comment.comment_id.to_string())
    }

    fn editable_comment(&self, comment_id: &str) -> Option<CommentView<'_>> {
        self.comment(comment_id).filter(|comment| comment.is_editable)
    }

    fn is_stale(&self, comment_id: Option<&str>) -> bool {
        comment_id.is_some_and(|id| self.editable_comment(id).is_none())
    }

    fn dispatch(&mut self, intent: HistoryIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = HistoryReducer::reduce(state, intent);
    }
}
