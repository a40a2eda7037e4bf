use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A security hotspot as returned by the server's "show" endpoint.
///
/// Only the fields the review screen needs are modelled; unknown fields
/// are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub key: String,
    pub message: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(with = "super::date")]
    pub creation_date: DateTime<Utc>,
    /// Login of the user the hotspot was attributed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub users: Vec<UserRef>,
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
    #[serde(default, rename = "comment")]
    pub comments: Vec<Comment>,
}

impl Hotspot {
    pub fn user(&self, login: &str) -> Option<&UserRef> {
        self.users.iter().find(|user| user.login == login)
    }

    pub fn comment(&self, key: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default = "default_true")]
    pub is_user_active: bool,
    #[serde(with = "super::date")]
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub diffs: Vec<FieldDiff>,
}

/// One field-level change inside a changelog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDiff {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub key: String,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(default)]
    pub updatable: bool,
    #[serde(with = "super::date")]
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}
