use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use github_monitor::api;
use github_monitor::config::Config;
use github_monitor::notes::{DisabledNotes, NotesIntegration};
use github_monitor::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Bookmarks directory: {}", config.bookmarks_dir().display());
    tracing::info!(
        "GitHub API: {} ({})",
        config.github.api_url,
        if config.github.token.is_some() { "token" } else { "anonymous" }
    );

    // No notes client is bundled; a real backend plugs in here.
    let notes = NotesIntegration::connect(Arc::new(DisabledNotes), config.notes.credentials()).await;

    let state = AppState::new(config.clone(), notes)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
