//! Authentication middleware
//!
//! Extracts the caller's session token and hands it to handlers as a
//! [`Credential`]. Validation is left to the records API, which rejects
//! unknown or expired tokens on the forwarded call.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use serde_json::json;

use crate::client::Credential;
use crate::state::AppState;

/// Paths that don't require authentication
fn is_public_path(path: &str) -> bool {
    // Only authenticate API routes
    // All non-API routes are static files and should be public
    if !path.starts_with("/api") {
        return true;
    }

    path == "/api/health" || path == "/api/config"
}

/// Token from the configured auth header, falling back to `Authorization: Bearer`
pub fn extract_credential(headers: &HeaderMap, auth_header: &str) -> Option<Credential> {
    let raw = headers
        .get(auth_header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(token) = raw {
        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        return Some(Credential::new(token));
    }

    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| Credential::new(auth.token()))
}

/// Authentication middleware
pub async fn auth_layer(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let credential = extract_credential(request.headers(), &state.config.upstream.auth_header);
    if let Some(cred) = credential {
        request.extensions_mut().insert(cred);
    } else if !is_public_path(&path) {
        tracing::debug!("Rejecting unauthenticated request to {}", path);
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "unauthorized"})),
        )
            .into_response();
    }

    next.run(request).await
}
