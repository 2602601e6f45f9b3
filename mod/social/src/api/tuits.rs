use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use tuiter_core::{ListParams, ListResult, ServiceError};

use crate::api::{AppState, resolve_uid};
use crate::model::{CreateTuit, Tuit};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tuits", get(list_tuits))
        .route(
            "/tuits/{tid}",
            get(get_tuit).put(update_tuit).delete(delete_tuit),
        )
        .route(
            "/users/{uid}/tuits",
            get(list_tuits_by_user).post(create_tuit),
        )
}

/// GET /tuits
async fn list_tuits(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResult<Tuit>>, ServiceError> {
    Ok(Json(svc.list_tuits(&params)?))
}

/// GET /tuits/{tid}
async fn get_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Tuit>, ServiceError> {
    Ok(Json(svc.get_tuit(&tid)?))
}

/// PUT /tuits/{tid} — JSON merge-patch.
async fn update_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Tuit>, ServiceError> {
    Ok(Json(svc.update_tuit(&tid, patch)?))
}

/// DELETE /tuits/{tid}
async fn delete_tuit(
    State(svc): State<AppState>,
    Path(tid): Path<String>,
) -> Result<(), ServiceError> {
    svc.delete_tuit(&tid)
}

/// GET /users/{uid}/tuits
async fn list_tuits_by_user(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Tuit>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_tuits_by_user(&uid)?))
}

/// POST /users/{uid}/tuits
async fn create_tuit(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
    Json(input): Json<CreateTuit>,
) -> Result<Json<Tuit>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.create_tuit(&uid, input)?))
}
