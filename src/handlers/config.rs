//! Configuration handlers
//!
//! Returns public configuration settings to the frontend

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::state::AppState;
use crate::tree::FULLNESS_THRESHOLD;

/// Public configuration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    /// Rows per page on request screens
    pub page_size: usize,
    /// Rows per page on dashboard widgets
    pub dashboard_page_size: usize,
    /// Load/capacity ratio at which containers are highlighted
    pub fullness_threshold: f64,
}

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(PublicConfig {
        page_size: state.config.ui.page_size,
        dashboard_page_size: state.config.ui.dashboard_page_size,
        fullness_threshold: FULLNESS_THRESHOLD,
    })
}
