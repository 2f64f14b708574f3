use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::models::RepoDetailsResponse;
use crate::state::AppState;

/// GET /api/repo/{owner}/{repo} - Repository details plus recent events.
///
/// 404 when the details lookup fails; events are best effort.
pub async fn repo_details(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<RepoDetailsResponse>, (StatusCode, Json<Value>)> {
    let Some(details) = state.github.get_details(&owner, &repo).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Repository not found" })),
        ));
    };

    let events = state.github.get_events(&owner, &repo).await;
    Ok(Json(RepoDetailsResponse { details, events }))
}
