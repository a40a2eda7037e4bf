//! File-backed hotspot storage.
//!
//! The hotspot lives in memory behind a lock and is written back to its JSON
//! file after every change. Writes go through a temporary file in the same
//! directory and replace the target atomically, serialized across processes
//! by an exclusive lock on a sibling `.lock` file.

mod error;

pub use error::StoreError;

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::RwLock;
use tempfile::NamedTempFile;

use crate::hotspot::Hotspot;

/// Shared handle to a hotspot and the file it was loaded from.
#[derive(Clone)]
pub struct HotspotStore {
    inner: Arc<RwLock<Hotspot>>,
    path: Arc<PathBuf>,
}

impl HotspotStore {
    /// Load a hotspot from a JSON file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let raw = fs::read_to_string(&path)?;
        let hotspot: Hotspot = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            hotspot = %hotspot.key,
            comments = hotspot.comments.len(),
            "Loaded hotspot"
        );
        Ok(Self {
            inner: Arc::new(RwLock::new(hotspot)),
            path: Arc::new(path),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current hotspot.
    pub fn snapshot(&self) -> Hotspot {
        self.inner.read().clone()
    }

    /// Replace a comment's markdown and re-render its HTML.
    ///
    /// # Errors
    /// `EmptyComment` for blank text; `CommentNotFound` / `NotUpdatable`
    /// when the comment cannot be changed; `Io` / `Json` when the file could not be written, in which
    /// case the in-memory hotspot is left untouched.
    pub fn edit_comment(&self, key: &str, markdown: &str) -> Result<(), StoreError> {
        if markdown.trim().is_empty() {
            return Err(StoreError::EmptyComment {
                key: key.to_string(),
            });
        }
        self.update(key, |hotspot, index| {
            let comment = &mut hotspot.comments[index];
            comment.markdown = Some(markdown.to_string());
            comment.html_text = Some(render_markdown(markdown));
        })?;
        tracing::info!(comment = key, "Comment edited");
        Ok(())
    }

    /// Remove a comment.
    ///
    /// # Errors
    /// Same as [`HotspotStore::edit_comment`].
    pub fn delete_comment(&self, key: &str) -> Result<(), StoreError> {
        self.update(key, |hotspot, index| {
            hotspot.comments.remove(index);
        })?;
        tracing::info!(comment = key, "Comment deleted");
        Ok(())
    }

    fn update<F>(&self, key: &str, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Hotspot, usize),
    {
        let mut guard = self.inner.write();
        let index = updatable_comment_index(&guard, key)?;

        let mut next = guard.clone();
        change(&mut next, index);
        self.persist(&next)?;

        *guard = next;
        Ok(())
    }

    fn persist(&self, hotspot: &Hotspot) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let lock_file = open_lock_file(&self.path)?;
        FileExt::lock_exclusive(&lock_file)?;

        let result = write_atomically(dir, &self.path, hotspot);

        if let Err(err) = FileExt::unlock(&lock_file) {
            tracing::warn!(error = %err, "Failed to release store lock");
        }
        if let Err(err) = &result {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to persist hotspot");
        }
        result
    }
}

fn write_atomically(dir: &Path, path: &Path, hotspot: &Hotspot) -> Result<(), StoreError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, hotspot)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| StoreError::Io(err.error))?;
    Ok(())
}

fn updatable_comment_index(hotspot: &Hotspot, key: &str) -> Result<usize, StoreError> {
    let index = hotspot
        .comments
        .iter()
        .position(|comment| comment.key == key)
        .ok_or_else(|| StoreError::CommentNotFound {
            key: key.to_string(),
        })?;
    if !hotspot.comments[index].updatable {
        return Err(StoreError::NotUpdatable {
            key: key.to_string(),
        });
    }
    Ok(index)
}

fn open_lock_file(path: &Path) -> std::io::Result<File> {
    let mut name = OsString::from(path.as_os_str());
    name.push(".lock");
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(PathBuf::from(name))
}

/// Render comment markdown to the HTML stored next to it.
pub fn render_markdown(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
