//! Session handlers
//!
//! The records API owns accounts; these endpoints only validate the caller's
//! token and return the profile behind it.

use axum::{extract::State, response::Json, Extension};

use crate::client::Credential;
use crate::error::AppResult;
use crate::model::User;
use crate::routes::ApiResponse;
use crate::state::AppState;

/// GET /api/user/login
///
/// First call after sign-in. Denied accounts, expired and revoked tokens
/// come back as 403/401 with a readable message.
pub async fn login(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.client.user_login(&cred).await?;
    tracing::info!("User {} signed in", user.id);
    Ok(Json(ApiResponse::success(user)))
}

/// GET /api/user/current
pub async fn current_user(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.client.user_own(&cred).await?;
    Ok(Json(ApiResponse::success(user)))
}
