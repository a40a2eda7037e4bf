use crate::ui::history::intent::HistoryIntent;
use crate::ui::history::state::{EditDraft, PanelSelectionState};
use crate::ui::mvi::Reducer;

pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = PanelSelectionState;
    type Intent = HistoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryIntent::FocusNext { entry_count } => PanelSelectionState {
                cursor: (state.cursor + 1).min(entry_count.saturating_sub(1)),
                ..state
            },
            HistoryIntent::FocusPrev => PanelSelectionState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            HistoryIntent::Clamp { entry_count } => PanelSelectionState {
                cursor: state.cursor.min(entry_count.saturating_sub(1)),
                ..state
            },
            // Opening another comment replaces the current draft.
            HistoryIntent::BeginEdit {
                comment_id,
                markdown,
            } => PanelSelectionState {
                editing: Some(EditDraft {
                    comment_id,
                    text: markdown,
                }),
                ..state
            },
            HistoryIntent::InsertChar(ch) => edit_text(state, |text| push_char(text, ch)),
            HistoryIntent::InsertText(pasted) => edit_text(state, |text| {
                for ch in pasted.replace("\r\n", "\n").chars() {
                    push_char(text, ch);
                }
            }),
            HistoryIntent::Backspace => edit_text(state, |text| {
                text.pop();
            }),
            HistoryIntent::CancelEdit | HistoryIntent::SubmitEdit => PanelSelectionState {
                editing: None,
                ..state
            },
            HistoryIntent::RequestDelete { comment_id } => PanelSelectionState {
                pending_delete: Some(comment_id),
                ..state
            },
            HistoryIntent::DismissDelete | HistoryIntent::ConfirmDelete => PanelSelectionState {
                pending_delete: None,
                ..state
            },
        }
    }
}

fn edit_text(state: PanelSelectionState, change: impl FnOnce(&mut String)) -> PanelSelectionState {
    match state.editing {
        Some(mut draft) => {
            change(&mut draft.text);
            PanelSelectionState {
                editing: Some(draft),
                ..state
            }
        }
        None => state,
    }
}

fn push_char(text: &mut String, ch: char) {
    match ch {
        '\r' => text.push('\n'),
        '\n' | '\t' => text.push(ch),
        _ if ch.is_control() => {}
        _ => text.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(id: &str, text: &str) -> PanelSelectionState {
        PanelSelectionState {
            editing: Some(EditDraft {
                comment_id: id.into(),
                text: text.into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn begin_edit_prefills_markdown() {
        let state = HistoryReducer::reduce(
            PanelSelectionState::default(),
            HistoryIntent::BeginEdit {
                comment_id: "c1".into(),
                markdown: "*hello*".into(),
            },
        );
        assert_eq!(state, editing("c1", "*hello*"));
    }

    #[test]
    fn typing_without_draft_is_noop() {
        let state = HistoryReducer::reduce(PanelSelectionState::default(), HistoryIntent::InsertChar('x'));
        assert!(state.is_idle());
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let state = HistoryReducer::reduce(editing("c1", "a"), HistoryIntent::InsertChar('\u{1b}'));
        assert_eq!(state.editing.unwrap().text, "a");
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let state = HistoryReducer::reduce(
            editing("c1", ""),
            HistoryIntent::InsertText("one\r\ntwo\rthree".into()),
        );
        assert_eq!(state.editing.unwrap().text, "one\ntwo\nthree");
    }

    #[test]
    fn backspace_removes_last_char() {
        let state = HistoryReducer::reduce(editing("c1", "héllo"), HistoryIntent::Backspace);
        assert_eq!(state.editing.unwrap().text, "héll");
    }

    #[test]
    fn cancel_edit_keeps_pending_delete() {
        let mut state = editing("c1", "x");
        state.pending_delete = Some("c2".into());
        let state = HistoryReducer::reduce(state, HistoryIntent::CancelEdit);
        assert_eq!(state.editing, None);
        assert_eq!(state.pending_delete_id(), Some("c2"));
    }

    #[test]
    fn focus_stays_in_bounds() {
        let state = HistoryReducer::reduce(
            PanelSelectionState::default(),
            HistoryIntent::FocusNext { entry_count: 0 },
        );
        assert_eq!(state.cursor, 0);

        let state = PanelSelectionState {
            cursor: 5,
            ..Default::default()
        };
        let state = HistoryReducer::reduce(state, HistoryIntent::Clamp { entry_count: 3 });
        assert_eq!(state.cursor, 2);
    }
}
