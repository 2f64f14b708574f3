pub mod bookmarks;
pub mod page;
pub mod repos;
pub mod search;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// All routes, with the front end as fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Frontend
        .route("/", get(page::serve_index).post(page::search_page))
        // API routes
        .route("/api/search", post(search::search))
        .route("/api/repo/{owner}/{repo}", get(repos::repo_details))
        .route("/api/bookmark", post(bookmarks::bookmark_repo))
        .with_state(state)
        .fallback(get(page::serve_index))
}
