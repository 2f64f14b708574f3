//! Optional third-party notes integration.
//!
//! The backend is injected at startup. Without credentials, or when login
//! fails, the integration stays disabled and bookmarks go to local files only.

use std::sync::Arc;

use async_trait::async_trait;

/// A notes service that bookmarks can be mirrored into.
#[async_trait]
pub trait NotesBackend: Send + Sync {
    /// Display name used in bookmark responses.
    fn name(&self) -> &str;

    /// Returns true when the session is usable.
    async fn login(&self, username: &str, password: &str) -> bool;

    async fn create_note(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

/// Backend used when no notes service is available.
pub struct DisabledNotes;

#[async_trait]
impl NotesBackend for DisabledNotes {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn login(&self, _username: &str, _password: &str) -> bool {
        false
    }

    async fn create_note(&self, _title: &str, _body: &str) -> anyhow::Result<()> {
        anyhow::bail!("Notes integration is disabled")
    }
}

/// A backend plus whether login succeeded.
pub struct NotesIntegration {
    backend: Arc<dyn NotesBackend>,
    initialized: bool,
}

impl NotesIntegration {
    pub fn disabled() -> Self {
        Self {
            backend: Arc::new(DisabledNotes),
            initialized: false,
        }
    }

    /// Log in once with `credentials`; any failure leaves the integration off.
    pub async fn connect(backend: Arc<dyn NotesBackend>, credentials: Option<(&str, &str)>) -> Self {
        let Some((username, password)) = credentials else {
            tracing::info!("Notes integration disabled: no credentials configured");
            return Self {
                backend,
                initialized: false,
            };
        };

        let initialized = backend.login(username, password).await;
        if initialized {
            tracing::info!("Notes integration enabled ({})", backend.name());
        } else {
            tracing::warn!("Failed to initialize notes integration ({})", backend.name());
        }

        Self {
            backend,
            initialized,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.initialized
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Mirror a note when enabled. Returns whether a note was written.
    pub async fn mirror(&self, title: &str, body: &str) -> bool {
        if !self.initialized {
            return false;
        }
        match self.backend.create_note(title, body).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to create note '{title}': {e:#}");
                false
            }
        }
    }
}
