//! Security hotspot data and the review history derived from it.

mod date;
mod history;
mod types;

pub use history::{
    Author, CommentFields, CommentView, EntryBody, HistoryEntry, HistoryProvider, ReviewHistory,
};
pub use types::{ChangelogEntry, Comment, FieldDiff, Hotspot, UserRef};
