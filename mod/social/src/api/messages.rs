use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, resolve_uid};
use crate::model::{Message, SendMessage};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{uid}/messages/{ruid}", post(send_message))
        .route("/users/{uid}/messages/sent", get(list_sent))
        .route("/users/{uid}/messages/received", get(list_received))
        .route("/messages/{mid}", delete(delete_message))
}

/// POST /users/{uid}/messages/{ruid}
async fn send_message(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path((uid, ruid)): Path<(String, String)>,
    Json(input): Json<SendMessage>,
) -> Result<Json<Message>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.send_message(&uid, &ruid, input)?))
}

/// GET /users/{uid}/messages/sent
async fn list_sent(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_sent_messages(&uid)?))
}

/// GET /users/{uid}/messages/received
async fn list_received(
    headers: HeaderMap,
    State(svc): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    let uid = resolve_uid(&uid, &headers, &svc)?;
    Ok(Json(svc.list_received_messages(&uid)?))
}

/// DELETE /messages/{mid}
async fn delete_message(
    State(svc): State<AppState>,
    Path(mid): Path<String>,
) -> Result<(), ServiceError> {
    svc.delete_message(&mid)
}
