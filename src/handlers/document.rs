//! Document handlers
//!
//! Detail view, search, the pending-shelving queue and the QR-confirmed
//! check-in/return actions.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, Credential};
use crate::error::{AppError, AppResult};
use crate::model::{
    Category, ConfirmDocument, Document, DocumentDetail, MoveDocument, Role, VerifyRequest,
};
use crate::pagination::{total_pages, Paginator};
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Document detail with the extras the detail dialog shows
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub document: DocumentDetail,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub has_pdf: bool,
    pub categories: Vec<Category>,
}

/// GET /api/documents/:id
pub async fn get_document(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DocumentView>>> {
    let client = &state.client;
    let document = client.document(&cred, &id).await?;

    let barcode = if document.status.has_barcode() {
        shelf_barcode(client, &cred, &document.id).await
    } else {
        None
    };

    let (media, categories) = tokio::join!(
        client.has_media(&cred, &document.id),
        client.categories(&cred, document.department_id()),
    );
    let has_pdf = media.unwrap_or_else(|e| {
        tracing::warn!("Media check failed for document {}: {}", document.id, e);
        false
    });
    let categories = categories.unwrap_or_else(|e| {
        tracing::warn!("Category lookup failed for document {}: {}", document.id, e);
        Vec::new()
    });

    Ok(Json(ApiResponse::success(DocumentView {
        location: document.location_path(),
        document,
        barcode,
        has_pdf,
        categories,
    })))
}

/// Barcode for staff and managers. Employees never see it, and a failed
/// lookup leaves the detail view without one.
async fn shelf_barcode(client: &ApiClient, cred: &Credential, id: &str) -> Option<String> {
    let user = match client.user_own(cred).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Role lookup failed for document {}: {}", id, e);
            return None;
        }
    };
    if user.role == Some(Role::Employee) {
        return None;
    }
    match client.document_barcode(cred, id).await {
        Ok(response) => response.barcode,
        Err(e) => {
            tracing::warn!("Barcode lookup failed for document {}: {}", id, e);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
    /// 1-based page over the matches
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub items: Vec<Document>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// GET /api/documents/search?name=&page=
///
/// The records API returns every match at once; the gateway pages them.
pub async fn search_documents(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<SearchResults>>> {
    let name = query.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Search term must not be empty".to_string()));
    }
    let found = state.client.find_documents(&cred, name).await?;

    let mut pager = Paginator::new(&found.data, state.config.ui.page_size);
    pager.jump(query.page.unwrap_or(1));
    Ok(Json(ApiResponse::success(SearchResults {
        items: pager.current_data().to_vec(),
        total: found.data.len(),
        total_pages: pager.max_page(),
        page: pager.current_page(),
    })))
}

#[derive(Debug, Deserialize)]
pub struct PendingQuery {
    /// 1-based page
    pub page: Option<u32>,
    /// `dashboard` for the compact widget, anything else for the full table
    pub view: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDocuments {
    pub items: Vec<DocumentDetail>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
}

/// GET /api/documents/pending
pub async fn pending_documents(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Query(query): Query<PendingQuery>,
) -> AppResult<Json<ApiResponse<PendingDocuments>>> {
    let per_page = match query.view.as_deref() {
        Some("dashboard") => state.config.ui.dashboard_page_size,
        _ => state.config.ui.page_size,
    };
    let page = query.page.unwrap_or(1).max(1);

    // The records API pages from zero.
    let result = state
        .client
        .pending_documents(&cred, page - 1, per_page)
        .await?;

    Ok(Json(ApiResponse::success(PendingDocuments {
        total_pages: total_pages(result.total, per_page),
        total: result.total,
        items: result.data,
        page,
    })))
}

fn require_qr(code: &str) -> AppResult<()> {
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("Scanned code is empty".to_string()));
    }
    Ok(())
}

/// POST /api/documents/confirm
pub async fn confirm_document(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<ConfirmDocument>,
) -> AppResult<Json<ApiResponse<Document>>> {
    require_qr(&req.location_qr_code)?;
    let document = state.client.confirm_document(&cred, &req).await?;
    tracing::info!("Document {} confirmed at its location", document.id);
    Ok(Json(ApiResponse::success(document)))
}

/// POST /api/documents/return
pub async fn return_document(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<VerifyRequest>,
) -> AppResult<Json<ApiResponse<Document>>> {
    require_qr(&req.qr_code)?;
    let document = state.client.return_document(&cred, &req).await?;
    tracing::info!("Document {} returned", document.id);
    Ok(Json(ApiResponse::success(document)))
}

/// PUT /api/documents/move
pub async fn move_document(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(req): Json<MoveDocument>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let document = state.client.move_document(&cred, &req).await?;
    tracing::info!("Document {} moved to folder {}", document.id, req.folder_id);
    Ok(Json(ApiResponse::success(document)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_qr_rejected() {
        assert!(require_qr("").is_err());
        assert!(require_qr("  ").is_err());
        assert!(require_qr("LOC-1").is_ok());
    }
}
