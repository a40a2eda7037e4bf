//! Drawing the history list and its modals.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::config::DisplayConfig;
use crate::hotspot::{Author, EntryBody, HistoryEntry};
use crate::sanitize::SanitizedRenderer;
use crate::sink::ActionSink;
use crate::ui::components::PopupDialog;
use crate::ui::history::diff::describe_diff;
use crate::ui::history::panel::HistoryPanel;
use crate::ui::history::state::EditDraft;
use crate::ui::theme::{ACCENT, COMMENT_PIPE, FOCUS_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const CREATED_LABEL: &str = "created";
pub const COMMENT_ADDED_LABEL: &str = "comment added";
pub const AFFORDANCE_HINT: &str = "[e] edit  [d] delete";

const MODAL_WIDTH: u16 = 72;
const PREVIEW_CHARS: usize = 60;

/// Lines of one history entry: a header, then the kind-specific body.
pub fn entry_lines(
    entry: &HistoryEntry,
    display: &DisplayConfig,
    sanitizer: &dyn SanitizedRenderer,
) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        display.format_timestamp(entry.timestamp),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(author) = &entry.author {
        header.push(Span::raw("  "));
        header.push(Span::styled(author_name(author), Style::default().fg(ACCENT)));
    }
    let label = match &entry.body {
        EntryBody::Creation => Some(CREATED_LABEL),
        EntryBody::Comment(_) => Some(COMMENT_ADDED_LABEL),
        EntryBody::Diff(_) => None,
    };
    if let Some(label) = label {
        header.push(Span::raw("  "));
        header.push(Span::styled(label, Style::default().fg(MUTED_TEXT)));
    }

    let mut lines = vec![Line::from(header)];
    match &entry.body {
        EntryBody::Creation => {}
        EntryBody::Diff(diffs) => {
            lines.extend(diffs.iter().map(|diff| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(describe_diff(diff), Style::default().fg(HEADER_TEXT)),
                ])
            }));
        }
        EntryBody::Comment(fields) => {
            if let Some(comment) = fields.complete() {
                let body = sanitizer.sanitize(comment.rendered_html);
                lines.extend(body.lines().map(|text| {
                    Line::from(vec![
                        Span::styled("  │ ", Style::default().fg(COMMENT_PIPE)),
                        Span::raw(text.to_string()),
                    ])
                }));
                if comment.is_editable {
                    lines.push(Line::from(Span::styled(
                        format!("  {AFFORDANCE_HINT}"),
                        Style::default().fg(MUTED_TEXT),
                    )));
                }
            }
        }
    }
    lines
}

/// One list item per entry, in the order given.
pub fn history_items(
    entries: &[HistoryEntry],
    display: &DisplayConfig,
    sanitizer: &dyn SanitizedRenderer,
) -> Vec<ListItem<'static>> {
    entries
        .iter()
        .map(|entry| ListItem::new(entry_lines(entry, display, sanitizer)))
        .collect()
}

/// Flatten styled lines into plain text, one line per row.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history<S: ActionSink>(
    frame: &mut Frame,
    area: Rect,
    panel: &HistoryPanel<S>,
    display: &DisplayConfig,
    sanitizer: &dyn SanitizedRenderer,
) {
    let list = List::new(history_items(panel.entries(), display, sanitizer))
        .block(
            Block::default()
                .title(" Review history ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(FOCUS_BG))
        .highlight_symbol("▌");
    let selected = (!panel.entries().is_empty()).then_some(panel.state().cursor);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);

    if let Some(draft) = &panel.state().editing {
        render_edit_modal(frame, area, draft);
    }
    if let Some(comment_id) = panel.state().pending_delete_id() {
        let preview = panel
            .comment(comment_id)
            .map(|comment| comment_preview(comment.raw_markdown));
        render_delete_modal(frame, area, preview);
    }
}

fn render_edit_modal(frame: &mut Frame, area: Rect, draft: &EditDraft) {
    let mut lines: Vec<Line> = draft
        .text
        .split('\n')
        .map(|text| Line::from(text.to_string()))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    PopupDialog::new("Edit comment", lines)
        .footer("Ctrl+S save · Esc cancel")
        .fixed_width(MODAL_WIDTH)
        .render(frame, area);
}

fn render_delete_modal(frame: &mut Frame, area: Rect, preview: Option<String>) {
    let mut lines = vec![Line::from("Do you want to delete this comment?")];
    if let Some(preview) = preview {
        lines.push(Line::from(Span::styled(
            format!("“{preview}”"),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    PopupDialog::new("Delete comment", lines)
        .footer("[y] delete · [n] cancel")
        .fixed_width(MODAL_WIDTH)
        .render(frame, area);
}

fn author_name(author: &Author) -> String {
    if author.active {
        author.display_name.clone()
    } else {
        format!("{} (deleted)", author.display_name)
    }
}

fn comment_preview(markdown: &str) -> String {
    let first = markdown.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let first = first.trim();
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        first.to_string()
    }
}
