use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::bookmarks::{BookmarkError, BookmarkRecord};
use crate::models::{BookmarkRequest, BookmarkResponse};
use crate::state::AppState;

const LOCAL_STORAGE: &str = "Local file";

fn failure(status: StatusCode, message: String) -> (StatusCode, Json<BookmarkResponse>) {
    (
        status,
        Json(BookmarkResponse {
            success: false,
            message,
            storage: None,
        }),
    )
}

/// POST /api/bookmark - Save a repository to a local file, and to the notes
/// service when one is connected.
///
/// Every outcome, including an undecodable body, is a `BookmarkResponse`.
pub async fn bookmark_repo(
    State(state): State<AppState>,
    payload: Result<Json<BookmarkRequest>, JsonRejection>,
) -> (StatusCode, Json<BookmarkResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Rejected bookmark payload: {rejection}");
            return failure(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let record = BookmarkRecord::new(
        &req.name,
        &req.url,
        req.description.as_deref().unwrap_or_default(),
    );

    let store = state.bookmarks.clone();
    let to_save = record.clone();
    let saved = tokio::task::spawn_blocking(move || store.save(&to_save)).await;

    match saved {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => {
            tracing::error!("Failed to bookmark '{}': {e}", record.name);
            let status = match &e {
                BookmarkError::InvalidName => StatusCode::BAD_REQUEST,
                BookmarkError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return failure(status, e.to_string());
        }
        Err(e) => {
            tracing::error!("Bookmark task for '{}' failed: {e}", record.name);
            return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    }

    let mut storage = LOCAL_STORAGE.to_string();
    if state.notes.mirror(&record.name, &record.to_text()).await {
        storage.push_str(", ");
        storage.push_str(state.notes.backend_name());
    }

    (
        StatusCode::OK,
        Json(BookmarkResponse {
            success: true,
            message: "Repository bookmarked successfully".to_string(),
            storage: Some(storage),
        }),
    )
}
