mod common;

use common::{buffer_text, comment, creation, diff, FixedHistory, RecordingSink};
use hotspot_review::config::DisplayConfig;
use hotspot_review::hotspot::{Author, FieldDiff, HistoryEntry};
use hotspot_review::sanitize::TerminalSanitizer;
use hotspot_review::ui::history::{
    entry_lines, history_items, plain_text, render_history, HistoryPanel, AFFORDANCE_HINT,
    COMMENT_ADDED_LABEL, CREATED_LABEL,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn display() -> DisplayConfig {
    DisplayConfig {
        local_time: false,
        ..DisplayConfig::default()
    }
}

fn text_of(entry: &HistoryEntry) -> String {
    plain_text(&entry_lines(entry, &display(), &TerminalSanitizer))
}

#[test]
fn one_item_per_entry() {
    let entries = vec![creation(0), comment("c1", "a", true), diff(vec![]), comment("c2", "b", false)];
    let items = history_items(&entries, &display(), &TerminalSanitizer);
    assert_eq!(items.len(), entries.len());
}

#[test]
fn creation_shows_author_and_label_only() {
    let text = text_of(&creation(10));
    assert_eq!(text, format!("Mar 1, 2024 10:00 AM  Alice  {CREATED_LABEL}"));
}

#[test]
fn editable_comment_shows_body_and_affordances() {
    let text = text_of(&comment("c1", "needs <b>review</b>", true));
    assert!(text.contains(COMMENT_ADDED_LABEL));
    assert!(text.contains("│ needs review"));
    assert!(text.contains(AFFORDANCE_HINT));
}

#[test]
fn read_only_comment_hides_affordances() {
    let entry = comment("c1", "not yours", false);
    let first = text_of(&entry);
    let second = text_of(&entry);
    assert!(first.contains("│ not yours"));
    assert!(!first.contains(AFFORDANCE_HINT));
    assert_eq!(first, second);
}

#[test]
fn incomplete_comment_renders_header_only() {
    let mut entry = comment("c1", "text", true);
    if let hotspot_review::hotspot::EntryBody::Comment(fields) = &mut entry.body {
        fields.rendered_html = None;
    }
    let text = text_of(&entry);
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains(AFFORDANCE_HINT));
}

#[test]
fn empty_markdown_renders_header_only() {
    let text = text_of(&comment("c1", "", true));
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains(AFFORDANCE_HINT));
}

#[test]
fn bad_date_format_renders_with_default() {
    let display = DisplayConfig {
        date_format: "%Q".into(),
        local_time: false,
    };
    let text = plain_text(&entry_lines(&creation(10), &display, &TerminalSanitizer));
    assert_eq!(text, format!("Mar 1, 2024 10:00 AM  Alice  {CREATED_LABEL}"));
}

#[test]
fn empty_diff_renders_header_only() {
    let text = text_of(&diff(vec![]));
    assert_eq!(text, "Mar 3, 2024 12:00 AM  Bob");
}

#[test]
fn diffs_render_in_order() {
    let text = text_of(&diff(vec![
        FieldDiff {
            key: "status".into(),
            old_value: Some("TO_REVIEW".into()),
            new_value: Some("REVIEWED".into()),
        },
        FieldDiff {
            key: "resolution".into(),
            old_value: None,
            new_value: Some("SAFE".into()),
        },
    ]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].trim(), "Status: REVIEWED (was TO_REVIEW)");
    assert_eq!(lines[2].trim(), "Resolution changed to SAFE");
}

#[test]
fn inactive_author_is_marked_deleted() {
    let mut entry = creation(0);
    entry.author = Some(Author {
        display_name: "Bob".into(),
        avatar: None,
        active: false,
    });
    assert!(text_of(&entry).contains("Bob (deleted)"));
}

#[test]
fn comment_body_cannot_inject_escape_sequences() {
    let text = text_of(&comment("c1", "\u{1b}[2Jboom", true));
    assert!(!text.contains('\u{1b}'));
    assert!(text.contains("│ boom"));
}

fn draw(panel: &HistoryPanel<RecordingSink>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_history(frame, area, panel, &display(), &TerminalSanitizer)
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn edit_modal_shows_markdown() {
    let mut panel = HistoryPanel::new(RecordingSink::default());
    panel.set_history(&FixedHistory, &vec![comment("c1", "*draft* text", true)]);
    assert!(!draw(&panel).contains("Edit comment"));

    panel.begin_edit("c1");
    let screen = draw(&panel);
    assert!(screen.contains("Edit comment"));
    assert!(screen.contains("*draft* text"));
}

#[test]
fn delete_modal_names_the_comment() {
    let mut panel = HistoryPanel::new(RecordingSink::default());
    panel.set_history(&FixedHistory, &vec![comment("c1", "obsolete remark", true)]);
    panel.request_delete("c1");
    let screen = draw(&panel);
    assert!(screen.contains("Delete comment"));
    assert!(screen.contains("Do you want to delete this comment?"));
    assert!(screen.contains("obsolete remark"));
}
