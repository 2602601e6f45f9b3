use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, resolve_uid};
use crate::model::{Like, Tuit, TuitStats, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/likes", get(list_liked_tuits))
        .route("/users/{uid}/likes/{tid}", get(find_like).put(toggle_like))
        .route("/tuits/{tid}/likes", get(list_tuit_likers))
}

/// GET /users/{uid}/likes — all tuits the user has liked.
async fn list_liked_tuits(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Tuit>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_liked_tuits(&uid)?))
}

/// GET /users/{uid}/likes/{tid} — the like record, or null.
async fn find_like(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<Option<Like>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.find_like(&uid, &tid)?))
}

/// PUT /users/{uid}/likes/{tid} — toggle the like, return the stats.
async fn toggle_like(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, tid)): Path<(String, String)>,
) -> Result<Json<TuitStats>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.toggle_like(&uid, &tid)?))
}

/// GET /tuits/{tid}/likes — all users who liked the tuit.
async fn list_tuit_likers(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Vec<User>>, ServiceError> {
    Ok(Json(svc.list_tuit_likers(&tid)?))
}
