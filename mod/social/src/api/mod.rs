//! HTTP API — one router file per resource, merged here.
//!
//! Handlers are thin: resolve identity, call the service, shape JSON.
//! Errors use ServiceError → {"code": "NOT_FOUND", "message": "..."}.

mod auth;
mod bookmarks;
mod dislikes;
mod follows;
mod likes;
mod messages;
mod tuits;
mod users;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;

use tuiter_core::ServiceError;

use crate::service::SocialService;

/// Shared application state.
pub type AppState = Arc<SocialService>;

/// Build the complete social API router.
///
/// All paths are root-level (`/users/...`, `/tuits/...`).
pub fn build_router(svc: Arc<SocialService>) -> Router {
    Router::new()
        .merge(auth::routes())
        .merge(users::routes())
        .merge(tuits::routes())
        .merge(likes::routes())
        .merge(dislikes::routes())
        .merge(follows::routes())
        .merge(bookmarks::routes())
        .merge(messages::routes())
        .with_state(svc)
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// The authenticated user id from a verified bearer token.
pub(crate) fn current_user(
    headers: &HeaderMap,
    svc: &SocialService,
) -> Result<String, ServiceError> {
    let token = bearer_token(headers)
        .ok_or_else(|| ServiceError::Unauthorized("missing authorization token".into()))?;
    let claims = svc
        .jwt()
        .verify(token)
        .map_err(ServiceError::Unauthorized)?;
    Ok(claims.sub)
}

/// Resolve a `{uid}` path parameter.
///
/// The literal token `me` maps to the authenticated subject of the bearer
/// token; identity is resolved here, before any workflow runs, so the
/// service layer only ever sees concrete user ids. Any other value passes
/// through untouched.
pub(crate) fn resolve_uid(
    uid: &str,
    headers: &HeaderMap,
    svc: &SocialService,
) -> Result<String, ServiceError> {
    if uid == "me" {
        current_user(headers, svc)
    } else {
        Ok(uid.to_string())
    }
}
