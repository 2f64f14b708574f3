use std::sync::Arc;

use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::github::GitHubClient;
use crate::notes::NotesIntegration;

/// Shared application state. Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
    pub bookmarks: BookmarkStore,
    pub notes: Arc<NotesIntegration>,
}

impl AppState {
    pub fn new(config: Config, notes: NotesIntegration) -> anyhow::Result<Self> {
        let github = GitHubClient::new(&config.github)?;
        let bookmarks = BookmarkStore::new(config.bookmarks_dir());

        Ok(Self {
            config,
            github,
            bookmarks,
            notes: Arc::new(notes),
        })
    }
}
