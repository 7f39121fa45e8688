use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::domain::Role;
use crate::services::Identity;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub username: String,
}

// ============================================================================
// Middleware
// ============================================================================

/// Verifies `Authorization: Bearer <token>` and stores the caller's
/// [`Identity`] in the request extensions.
///
/// No token is `401`; a token that fails verification is `403`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).ok_or_else(ApiError::access_denied)?;

    let identity = state.auth_service().verify_token(&token)?;
    tracing::Span::current().record("user_id", identity.username.as_str());

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Write operations are admin-only.
pub fn require_admin(identity: &Identity) -> Result<(), ApiError> {
    if identity.is_admin() {
        Ok(())
    } else {
        tracing::warn!(username = %identity.username, "Rejected write by non-admin");
        Err(ApiError::admin_required())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/login
/// Authenticate with username and password, returns a bearer token on success
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;

    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let result = state.auth_service().login(&username, &password).await?;

    Ok(Json(LoginResponse {
        token: result.token,
        role: result.role,
        username: result.username,
    }))
}
