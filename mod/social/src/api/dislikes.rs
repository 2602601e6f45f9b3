use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, resolve_uid};
use crate::model::{Dislike, Tuit, TuitStats};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/dislikes", get(list_disliked_tuits))
        .route(
            "/users/{uid}/dislikes/{tid}",
            get(find_dislike).put(toggle_dislike),
        )
}

/// GET /users/{uid}/dislikes — all tuits the user has disliked.
async fn list_disliked_tuits(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Tuit>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_disliked_tuits(&uid)?))
}

/// GET /users/{uid}/dislikes/{tid} — the dislike record, or null.
async fn find_dislike(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<Option<Dislike>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.find_dislike(&uid, &tid)?))
}

/// PUT /users/{uid}/dislikes/{tid} — toggle the dislike, return the stats.
async fn toggle_dislike(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<TuitStats>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.toggle_dislike(&uid, &tid)?))
}
