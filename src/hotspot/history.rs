//! Review history: the ordered sequence of events shown for a hotspot.

use chrono::{DateTime, Utc};

use super::types::{FieldDiff, Hotspot};

/// Who produced a history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub display_name: String,
    pub avatar: Option<String>,
    pub active: bool,
}

/// Comment payload of a history entry.
///
/// Fields are optional because the provider passes through whatever the
/// server returned. Use [`CommentFields::complete`] before offering any
/// comment-specific UI; an empty string counts as missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentFields {
    pub comment_id: Option<String>,
    pub rendered_html: Option<String>,
    pub raw_markdown: Option<String>,
    pub is_editable: bool,
}

/// Borrowed view of a comment with every required field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentView<'a> {
    pub comment_id: &'a str,
    pub rendered_html: &'a str,
    pub raw_markdown: &'a str,
    pub is_editable: bool,
}

impl CommentFields {
    /// All three fields present and non-empty.
    pub fn complete(&self) -> Option<CommentView<'_>> {
        Some(CommentView {
            comment_id: non_empty(&self.comment_id)?,
            rendered_html: non_empty(&self.rendered_html)?,
            raw_markdown: non_empty(&self.raw_markdown)?,
            is_editable: self.is_editable,
        })
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    Creation,
    Comment(CommentFields),
    Diff(Vec<FieldDiff>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub author: Option<Author>,
    pub body: EntryBody,
}

impl HistoryEntry {
    /// The comment of this entry, if it is a complete comment.
    pub fn comment(&self) -> Option<CommentView<'_>> {
        match &self.body {
            EntryBody::Comment(fields) => fields.complete(),
            EntryBody::Creation | EntryBody::Diff(_) => None,
        }
    }

    /// The comment of this entry, if the current user may edit or delete it.
    pub fn editable_comment(&self) -> Option<CommentView<'_>> {
        self.comment().filter(|comment| comment.is_editable)
    }
}

/// Supplies the ordered history of a subject.
///
/// Ordering is the provider's responsibility; consumers render entries
/// exactly in the order returned.
pub trait HistoryProvider {
    type Subject;

    fn history(&self, subject: &Self::Subject) -> Vec<HistoryEntry>;
}

/// Builds the review history of a [`Hotspot`]: creation, changelog and
/// comments merged chronologically.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewHistory;

impl HistoryProvider for ReviewHistory {
    type Subject = Hotspot;

    fn history(&self, hotspot: &Hotspot) -> Vec<HistoryEntry> {
        let mut history = Vec::with_capacity(1 + hotspot.changelog.len() + hotspot.comments.len());

        history.push(HistoryEntry {
            timestamp: hotspot.creation_date,
            author: hotspot
                .author
                .as_deref()
                .map(|login| author_for_login(hotspot, login)),
            body: EntryBody::Creation,
        });

        for log in &hotspot.changelog {
            let name = log.user_name.clone().or_else(|| log.user.clone());
            history.push(HistoryEntry {
                timestamp: log.creation_date,
                author: name.map(|display_name| Author {
                    display_name,
                    avatar: log.avatar.clone(),
                    active: log.is_user_active,
                }),
                body: EntryBody::Diff(log.diffs.clone()),
            });
        }

        for comment in &hotspot.comments {
            history.push(HistoryEntry {
                timestamp: comment.created_at,
                author: Some(author_for_login(hotspot, &comment.login)),
                body: EntryBody::Comment(CommentFields {
                    comment_id: Some(comment.key.clone()),
                    rendered_html: comment.html_text.clone(),
                    raw_markdown: comment.markdown.clone(),
                    is_editable: comment.updatable,
                }),
            });
        }

        // Stable: ties keep creation, changelog, comment order.
        history.sort_by_key(|entry| entry.timestamp);
        history
    }
}

fn author_for_login(hotspot: &Hotspot, login: &str) -> Author {
    match hotspot.user(login) {
        Some(user) => Author {
            display_name: user.name.clone().unwrap_or_else(|| user.login.clone()),
            avatar: user.avatar.clone(),
            active: user.active,
        },
        None => Author {
            display_name: login.to_string(),
            avatar: None,
            active: true,
        },
    }
}
