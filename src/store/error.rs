//! Error types for hotspot persistence.

use thiserror::Error;

/// Errors that can occur while loading or changing a stored hotspot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, locking or replacing the hotspot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The hotspot file is not valid hotspot JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No comment with this key exists on the hotspot
    #[error("Comment '{key}' not found")]
    CommentNotFound { key: String },

    /// A comment cannot be saved without text
    #[error("Comment '{key}' cannot be empty")]
    EmptyComment { key: String },

    /// The comment exists but the current user may not change it
    #[error("Comment '{key}' cannot be modified")]
    NotUpdatable { key: String },
}
