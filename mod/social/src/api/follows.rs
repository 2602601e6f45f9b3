use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, resolve_uid};
use crate::model::{Follow, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{uid}/follows/{ouid}",
            post(follow).delete(unfollow),
        )
        .route("/users/{uid}/following", get(list_following))
        .route("/users/{uid}/followers", get(list_followers))
}

/// POST /users/{uid}/follows/{ouid}
async fn follow(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, ouid)): Path<(String, String)>,
) -> Result<Json<Follow>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.follow(&uid, &ouid)?))
}

/// DELETE /users/{uid}/follows/{ouid}
async fn unfollow(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, ouid)): Path<(String, String)>,
) -> Result<(), ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    svc.unfollow(&uid, &ouid)
}

/// GET /users/{uid}/following
async fn list_following(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<User>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_following(&uid)?))
}

/// GET /users/{uid}/followers
async fn list_followers(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<User>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_followers(&uid)?))
}
