//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::history::PanelSelectionState;

/// Which surface receives keys. Open modals take precedence over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Editing,
    ConfirmDelete,
}

impl InputMode {
    pub fn of(state: &PanelSelectionState) -> Self {
        if state.editing.is_some() {
            Self::Editing
        } else if state.pending_delete.is_some() {
            Self::ConfirmDelete
        } else {
            Self::Browse
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    FocusNext,
    FocusPrev,
    Edit,
    Delete,
    AcknowledgeError,
    Type(char),
    Backspace,
    SubmitEdit,
    CancelEdit,
    ConfirmDelete,
    DismissDelete,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match mode {
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(Command::CancelEdit),
            KeyCode::Char('s') if ctrl => Some(Command::SubmitEdit),
            KeyCode::Enter => Some(Command::Type('\n')),
            KeyCode::Tab => Some(Command::Type('\t')),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Char(ch) if !ctrl => Some(Command::Type(ch)),
            _ => None,
        },
        InputMode::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Command::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(Command::DismissDelete),
            _ => None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Command::FocusNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::FocusPrev),
            KeyCode::Char('e') => Some(Command::Edit),
            KeyCode::Char('d') => Some(Command::Delete),
            KeyCode::Char('x') => Some(Command::AcknowledgeError),
            _ => None,
        },
    }
}
