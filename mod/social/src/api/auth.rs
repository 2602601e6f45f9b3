use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};

use tuiter_core::ServiceError;

use crate::api::{AppState, current_user};
use crate::model::{CreateUser, LoginRequest, LoginResponse, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/profile", get(profile))
}

/// POST /auth/login — verify credentials, issue a bearer token.
async fn login(
    State(svc): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    Ok(Json(svc.login(&req.username, &req.password)?))
}

/// POST /auth/register — create an account and log in.
async fn register(
    State(svc): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<LoginResponse>, ServiceError> {
    Ok(Json(svc.register(req)?))
}

/// GET /auth/profile — the current user, from a verified token.
async fn profile(
    headers: HeaderMap,
    State(svc): State<AppState>,
) -> Result<Json<User>, ServiceError> {
    let uid = current_user(&headers, &svc)?;
    Ok(Json(svc.get_user(&uid)?))
}
