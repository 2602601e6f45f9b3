use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, resolve_uid};
use crate::model::{Bookmark, Tuit};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{uid}/bookmarks/{tid}",
            post(bookmark).delete(unbookmark),
        )
        .route("/users/{uid}/bookmarks", get(list_bookmarked_tuits))
}

/// POST /users/{uid}/bookmarks/{tid}
async fn bookmark(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<Bookmark>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.bookmark(&uid, &tid)?))
}

/// DELETE /users/{uid}/bookmarks/{tid}
async fn unbookmark(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<(), ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    svc.unbookmark(&uid, &tid)
}

/// GET /users/{uid}/bookmarks
async fn list_bookmarked_tuits(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Tuit>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_bookmarked_tuits(&uid)?))
}
