//! Flat-file bookmark store: one UTF-8 text file per repository name.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Repository name is required")]
    InvalidName,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// What gets written for a bookmark
#[derive(Debug, Clone)]
pub struct BookmarkRecord {
    pub name: String,
    pub url: String,
    pub description: String,
    pub bookmarked_at: NaiveDateTime,
}

impl BookmarkRecord {
    pub fn new(name: &str, url: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            description: description.to_string(),
            bookmarked_at: Local::now().naive_local(),
        }
    }

    /// Render the fixed human-readable layout.
    pub fn to_text(&self) -> String {
        format!(
            "Repository: {}\nURL: {}\nDescription: {}\nBookmarked on: {}\n",
            self.name,
            self.url,
            self.description,
            self.bookmarked_at.format(TIMESTAMP_FORMAT)
        )
    }
}

#[derive(Debug, Clone)]
pub struct BookmarkStore {
    dir: PathBuf,
}

impl BookmarkStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File a record is written to. The name is used verbatim: no escaping,
    /// and repositories from different owners with the same name share a file.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.txt"))
    }

    /// Write `record`, creating the directory if needed and replacing any
    /// previous bookmark with the same name.
    pub fn save(&self, record: &BookmarkRecord) -> Result<PathBuf, BookmarkError> {
        if record.name.trim().is_empty() {
            return Err(BookmarkError::InvalidName);
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&record.name);
        std::fs::write(&path, record.to_text())?;

        tracing::info!("Bookmarked {} to {}", record.name, path.display());
        Ok(path)
    }

    /// Bookmark a repository now.
    pub fn bookmark(&self, name: &str, url: &str, description: &str) -> Result<PathBuf, BookmarkError> {
        self.save(&BookmarkRecord::new(name, url, description))
    }
}
