use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use tuiter_core::{ListParams, ListResult, ServiceError};

use crate::api::{AppState, resolve_uid};
use crate::model::{CreateUser, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{uid}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /users
async fn list_users(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResult<User>>, ServiceError> {
    Ok(Json(svc.list_users(&params)?))
}

/// POST /users
async fn create_user(
    State(svc): State<AppState>,
    Json(input): Json<CreateUser>,
) -> Result<Json<User>, ServiceError> {
    Ok(Json(svc.create_user(input)?))
}

/// GET /users/{uid}
async fn get_user(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<User>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.get_user(&uid)?))
}

/// PUT /users/{uid} — JSON merge-patch.
async fn update_user(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<User>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.update_user(&uid, patch)?))
}

/// DELETE /users/{uid}
async fn delete_user(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<(), ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    svc.delete_user(&uid)
}
