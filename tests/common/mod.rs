#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use ratatui::buffer::Buffer;

use hotspot_review::hotspot::{Author, CommentFields, EntryBody, FieldDiff, HistoryEntry, Hotspot};
use hotspot_review::sink::ActionSink;

pub const HOTSPOT_JSON: &str = r#"{
  "key": "AX-hs-1",
  "message": "Make sure this weak hash algorithm is not used in a sensitive context",
  "status": "TO_REVIEW",
  "creationDate": "2024-03-01T10:00:00+0000",
  "author": "alice",
  "users": [
    { "login": "alice", "name": "Alice Adams", "avatar": "a1b2", "active": true },
    { "login": "bob", "name": "Bob Brown", "active": false }
  ],
  "changelog": [
    {
      "user": "bob",
      "userName": "Bob Brown",
      "isUserActive": false,
      "creationDate": "2024-03-02T09:00:00+0000",
      "diffs": [
        { "key": "status", "oldValue": "TO_REVIEW", "newValue": "REVIEWED" },
        { "key": "resolution", "newValue": "SAFE" }
      ]
    }
  ],
  "comment": [
    {
      "key": "c1",
      "login": "alice",
      "htmlText": "<p>First <strong>look</strong></p>",
      "markdown": "First *look*",
      "updatable": true,
      "createdAt": "2024-03-01T12:00:00+0000"
    },
    {
      "key": "c2",
      "login": "bob",
      "htmlText": "<p>Not mine</p>",
      "markdown": "Not mine",
      "updatable": false,
      "createdAt": "2024-03-03T08:00:00+0000"
    }
  ]
}"#;

pub fn sample_hotspot() -> Hotspot {
    serde_json::from_str(HOTSPOT_JSON).expect("sample hotspot parses")
}

/// Write the sample hotspot into `dir` and return its path.
pub fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("hotspot.json");
    std::fs::write(&path, HOTSPOT_JSON).expect("write sample hotspot");
    path
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

pub fn author(name: &str) -> Option<Author> {
    Some(Author {
        display_name: name.into(),
        avatar: None,
        active: true,
    })
}

pub fn creation(hour: u32) -> HistoryEntry {
    HistoryEntry {
        timestamp: at(1, hour),
        author: author("Alice"),
        body: EntryBody::Creation,
    }
}

pub fn comment(id: &str, markdown: &str, editable: bool) -> HistoryEntry {
    HistoryEntry {
        timestamp: at(2, 0),
        author: author("Alice"),
        body: EntryBody::Comment(CommentFields {
            comment_id: Some(id.into()),
            rendered_html: Some(format!("<p>{markdown}</p>")),
            raw_markdown: Some(markdown.into()),
            is_editable: editable,
        }),
    }
}

pub fn diff(diffs: Vec<FieldDiff>) -> HistoryEntry {
    HistoryEntry {
        timestamp: at(3, 0),
        author: author("Bob"),
        body: EntryBody::Diff(diffs),
    }
}

/// History provider returning a fixed list, for panel tests.
pub struct FixedHistory;

impl hotspot_review::hotspot::HistoryProvider for FixedHistory {
    type Subject = Vec<HistoryEntry>;

    fn history(&self, subject: &Vec<HistoryEntry>) -> Vec<HistoryEntry> {
        subject.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Edit { id: String, text: String },
    Delete { id: String },
}

/// [`ActionSink`] that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingSink {
    calls: RefCell<Vec<SinkCall>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.borrow().clone()
    }
}

impl ActionSink for RecordingSink {
    fn commit_edit(&self, id: &str, new_text: String) {
        self.calls.borrow_mut().push(SinkCall::Edit {
            id: id.into(),
            text: new_text,
        });
    }

    fn commit_delete(&self, id: &str) {
        self.calls.borrow_mut().push(SinkCall::Delete { id: id.into() });
    }
}

/// Rendered buffer as text, one row per line.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
