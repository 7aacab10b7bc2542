//! Document tree handlers

use axum::{extract::State, response::Json, Extension};

use crate::client::Credential;
use crate::error::AppResult;
use crate::routes::ApiResponse;
use crate::state::AppState;
use crate::tree::{annotate, full_containers, AnnotatedDepartment, FullContainer};

/// GET /api/tree
pub async fn get_tree(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<Vec<AnnotatedDepartment>>>> {
    let trees = state.client.document_tree(&cred).await?;
    Ok(Json(ApiResponse::success(annotate(trees))))
}

/// GET /api/tree/full
pub async fn get_full_containers(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<Vec<FullContainer>>>> {
    let trees = state.client.document_tree(&cred).await?;
    let full = full_containers(&annotate(trees));
    tracing::debug!("{} containers at or above the fullness threshold", full.len());
    Ok(Json(ApiResponse::success(full)))
}
