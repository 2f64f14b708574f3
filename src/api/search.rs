use axum::extract::State;
use axum::{Form, Json};

use crate::models::{Repository, SearchForm};
use crate::search::search_repositories;
use crate::state::AppState;

/// POST /api/search - Search GitHub and return ranked repositories as JSON.
///
/// Does not insist on a topic; an empty topic simply ranks every hit at zero.
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Json<Vec<Repository>> {
    let sort = form.sort_key();
    let topic = form.topic.as_deref().unwrap_or_default();

    let results = search_repositories(&state.github, form.language.as_deref(), topic, sort).await;
    tracing::info!("Search returned {} repositories", results.len());
    Json(results)
}
