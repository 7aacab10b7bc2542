//! Borrow and import request handlers
//!
//! Written once over [`RequestRecord`] and mounted twice, under
//! `/api/borrow-requests` and `/api/import-requests`.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, Credential, RequestRecord};
use crate::error::{AppError, AppResult};
use crate::model::{AnalysisData, Reject, RequestFilter, VerifyRequest};
use crate::pagination::{total_pages, Page};
use crate::routes::ApiResponse;
use crate::state::AppState;

/// One page of requests plus what the pager needs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestList<R> {
    pub items: Vec<R>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
}

impl<R> RequestList<R> {
    fn from_page(page: Page<R>, current: u32, per_page: usize) -> Self {
        Self {
            total_pages: total_pages(page.total, per_page),
            total: page.total,
            items: page.data,
            page: current,
        }
    }
}

/// GET /api/{kind}-requests
pub async fn list<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Query(mut filter): Query<RequestFilter>,
) -> AppResult<Json<ApiResponse<RequestList<R>>>> {
    let page = *filter.page.get_or_insert(1);
    let result = state.client.requests::<R>(&cred, &filter).await?;
    Ok(Json(ApiResponse::success(RequestList::from_page(
        result,
        page,
        state.config.ui.page_size,
    ))))
}

/// GET /api/{kind}-requests/own
pub async fn own<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Query(mut filter): Query<RequestFilter>,
) -> AppResult<Json<ApiResponse<RequestList<R>>>> {
    let page = *filter.page.get_or_insert(1);
    let result = state.client.own_requests::<R>(&cred, &filter).await?;
    Ok(Json(ApiResponse::success(RequestList::from_page(
        result,
        page,
        state.config.ui.page_size,
    ))))
}

/// GET /api/{kind}-requests/:id
pub async fn detail<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<R>>> {
    let request = state.client.request::<R>(&cred, &id).await?;
    Ok(Json(ApiResponse::success(request)))
}

/// POST /api/{kind}-requests
pub async fn create<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(body): Json<R::Create>,
) -> AppResult<Json<ApiResponse<R>>> {
    let request = state.client.create_request::<R>(&cred, &body).await?;
    tracing::info!("{} filed", R::KIND.noun());
    Ok(Json(ApiResponse::success(request)))
}

/// Current state of a request, refused unless it is still pending
async fn pending<R: RequestRecord>(
    client: &ApiClient,
    cred: &Credential,
    id: &str,
    action: &str,
) -> AppResult<R> {
    let current = client.request::<R>(cred, id).await?;
    let status = current.status();
    if !status.is_pending() {
        return Err(AppError::BadRequest(format!(
            "{} {} is {} and cannot be {}",
            R::KIND.noun(),
            id,
            status.label(),
            action
        )));
    }
    Ok(current)
}

/// POST /api/{kind}-requests/:id/accept
pub async fn accept<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<R>>> {
    let current = pending::<R>(&state.client, &cred, &id, "approved").await?;
    let request = state.client.accept_request::<R>(&cred, &id).await?;
    tracing::info!(
        "{} {} for {} approved",
        R::KIND.noun(),
        id,
        current.requester().full_name()
    );
    Ok(Json(ApiResponse::success(request)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectBody {
    pub rejected_reason: String,
}

/// POST /api/{kind}-requests/:id/reject
pub async fn reject<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    Json(body): Json<RejectBody>,
) -> AppResult<Json<ApiResponse<R>>> {
    let reason = body.rejected_reason.trim();
    if reason.is_empty() {
        return Err(AppError::Validation("A rejection reason is required".to_string()));
    }
    pending::<R>(&state.client, &cred, &id, "rejected").await?;
    let payload = Reject {
        id: id.clone(),
        rejected_reason: reason.to_string(),
    };
    let request = state.client.reject_request::<R>(&cred, &payload).await?;
    tracing::info!("{} {} rejected", R::KIND.noun(), id);
    Ok(Json(ApiResponse::success(request)))
}

/// POST /api/{kind}-requests/:id/cancel
pub async fn cancel<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<R>>> {
    let current = state.client.request::<R>(&cred, &id).await?;
    if current.status().is_final() {
        return Err(AppError::BadRequest(format!(
            "{} {} is already {}",
            R::KIND.noun(),
            id,
            current.status().label()
        )));
    }
    let request = state.client.cancel_request::<R>(&cred, &id).await?;
    tracing::info!("{} {} canceled", R::KIND.noun(), id);
    Ok(Json(ApiResponse::success(request)))
}

/// POST /api/{kind}-requests/verify
pub async fn verify<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
    Json(body): Json<VerifyRequest>,
) -> AppResult<Json<ApiResponse<R>>> {
    if body.qr_code.trim().is_empty() {
        return Err(AppError::BadRequest("Scanned code is empty".to_string()));
    }
    let request = state.client.verify_request::<R>(&cred, &body).await?;
    tracing::info!("{} confirmed by scan", R::KIND.noun());
    Ok(Json(ApiResponse::success(request)))
}

/// GET /api/{kind}-requests/analysis
pub async fn analysis<R: RequestRecord>(
    State(state): State<AppState>,
    Extension(cred): Extension<Credential>,
) -> AppResult<Json<ApiResponse<Vec<AnalysisData>>>> {
    let rows = state.client.request_analysis(&cred, R::KIND).await?;
    Ok(Json(ApiResponse::success(rows)))
}
