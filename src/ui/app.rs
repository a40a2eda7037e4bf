//! Host screen: hotspot header, history panel, footer.

use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::config::Config;
use crate::error::{ErrorCategory, ErrorRegistry, ErrorSeverity};
use crate::hotspot::{Hotspot, ReviewHistory};
use crate::sanitize::TerminalSanitizer;
use crate::sink::{ActionSink, CommitOutcome};
use crate::store::{HotspotStore, StoreError};
use crate::ui::header::{footer_widget, header_widget};
use crate::ui::history::{render_history, HistoryPanel};
use crate::ui::input::{map_key, Command, InputMode};

pub struct App<S> {
    config: Config,
    store: HotspotStore,
    hotspot: Hotspot,
    panel: HistoryPanel<S>,
    errors: ErrorRegistry,
    sanitizer: TerminalSanitizer,
    running: bool,
}

impl<S: ActionSink> App<S> {
    pub fn new(config: Config, store: HotspotStore, sink: S) -> Self {
        let hotspot = store.snapshot();
        let mut panel = HistoryPanel::new(sink);
        panel.set_history(&ReviewHistory, &hotspot);
        Self {
            config,
            store,
            hotspot,
            panel,
            errors: ErrorRegistry::default(),
            sanitizer: TerminalSanitizer,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn panel(&self) -> &HistoryPanel<S> {
        &self.panel
    }

    pub fn errors(&self) -> &ErrorRegistry {
        &self.errors
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(command) = map_key(key, InputMode::of(self.panel.state())) else {
            return;
        };
        match command {
            Command::Quit => self.running = false,
            Command::FocusNext => self.panel.focus_next(),
            Command::FocusPrev => self.panel.focus_prev(),
            Command::Edit => {
                self.panel.edit_focused();
            }
            Command::Delete => {
                self.panel.delete_focused();
            }
            Command::AcknowledgeError => {
                if let Some(error) = self.errors.current_error() {
                    self.errors.acknowledge(error.id);
                }
            }
            Command::Type(ch) => self.panel.type_char(ch),
            Command::Backspace => self.panel.backspace(),
            Command::SubmitEdit => {
                self.panel.submit_edit();
            }
            Command::CancelEdit => self.panel.cancel_edit(),
            Command::ConfirmDelete => {
                self.panel.confirm_delete();
            }
            Command::DismissDelete => self.panel.dismiss_delete(),
        }
    }

    pub fn on_paste(&mut self, text: String) {
        self.panel.paste(text);
    }

    /// A commit finished. Failures go to the error registry; either way the
    /// history is re-read so the panel reflects what was actually stored.
    pub fn on_commit_settled(&mut self, outcome: CommitOutcome) {
        match outcome.result {
            Ok(()) => tracing::info!(
                comment = outcome.action.comment_id(),
                action = outcome.action.describe(),
                "Commit succeeded"
            ),
            Err(err) => {
                let category = match &err {
                    StoreError::Io(_) | StoreError::Json(_) => ErrorCategory::Store,
                    StoreError::EmptyComment { .. }
                    | StoreError::CommentNotFound { .. }
                    | StoreError::NotUpdatable { .. } => ErrorCategory::Commit,
                };
                self.errors.record_with_details(
                    ErrorSeverity::Error,
                    category,
                    format!("Could not {}", outcome.action.describe()),
                    Some(err.to_string()),
                );
            }
        }
        self.reload();
    }

    pub fn reload(&mut self) {
        self.hotspot = self.store.snapshot();
        self.panel.set_history(&ReviewHistory, &self.hotspot);
    }

    pub fn render(&self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(header_widget(&self.hotspot), header);
        render_history(frame, body, &self.panel, &self.config.display, &self.sanitizer);
        let error = self.errors.current_error();
        frame.render_widget(footer_widget(error.as_ref()), footer);
    }
}
