use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{self, request};
use crate::middleware::auth_layer;
use crate::model::{BorrowRequest, ImportRequest};
use crate::state::AppState;

pub mod health;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: true,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Routes for one request workflow, mounted under its own prefix
fn workflow_routes<R: crate::client::RequestRecord>() -> Router<AppState> {
    Router::new()
        .route("/", get(request::list::<R>).post(request::create::<R>))
        .route("/own", get(request::own::<R>))
        .route("/analysis", get(request::analysis::<R>))
        .route("/verify", post(request::verify::<R>))
        .route("/:id", get(request::detail::<R>))
        .route("/:id/accept", post(request::accept::<R>))
        .route("/:id/reject", post(request::reject::<R>))
        .route("/:id/cancel", post(request::cancel::<R>))
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Config routes
        .route("/config", get(handlers::config::get_config))
        // Session routes
        .route("/user/login", get(handlers::user::login))
        .route("/user/current", get(handlers::user::current_user))
        // Tree routes
        .route("/tree", get(handlers::tree::get_tree))
        .route("/tree/full", get(handlers::tree::get_full_containers))
        // Hierarchy routes
        .route(
            "/departments",
            get(handlers::hierarchy::list_departments).post(handlers::hierarchy::create_department),
        )
        .route(
            "/departments/:id",
            get(handlers::hierarchy::get_department)
                .put(handlers::hierarchy::update_department)
                .delete(handlers::hierarchy::delete_department),
        )
        .route("/departments/:id/rooms", get(handlers::hierarchy::list_rooms))
        .route("/rooms", post(handlers::hierarchy::create_room))
        .route(
            "/rooms/:id",
            get(handlers::hierarchy::get_room)
                .put(handlers::hierarchy::update_room)
                .delete(handlers::hierarchy::delete_room),
        )
        .route("/rooms/:id/lockers", get(handlers::hierarchy::list_lockers))
        .route("/lockers", post(handlers::hierarchy::create_locker))
        .route(
            "/lockers/:id",
            get(handlers::hierarchy::get_locker)
                .put(handlers::hierarchy::update_locker)
                .delete(handlers::hierarchy::delete_locker),
        )
        .route("/lockers/:id/folders", get(handlers::hierarchy::list_folders))
        .route("/folders", post(handlers::hierarchy::create_folder))
        .route("/folders/suggested", get(handlers::hierarchy::suggest_folders))
        .route(
            "/folders/:id",
            get(handlers::hierarchy::get_folder)
                .put(handlers::hierarchy::update_folder)
                .delete(handlers::hierarchy::delete_folder),
        )
        // Document routes
        .route("/documents/search", get(handlers::document::search_documents))
        .route("/documents/pending", get(handlers::document::pending_documents))
        .route("/documents/confirm", post(handlers::document::confirm_document))
        .route("/documents/return", post(handlers::document::return_document))
        .route("/documents/move", put(handlers::document::move_document))
        .route("/documents/:id", get(handlers::document::get_document))
        // Request workflows
        .nest("/borrow-requests", workflow_routes::<BorrowRequest>())
        .nest("/import-requests", workflow_routes::<ImportRequest>());

    // Static file service for frontend
    // Serves files from static_dir, falls back to index.html for SPA routing
    let static_dir = state.config.static_dir.clone();
    let index_file = static_dir.join("index.html");
    let serve_dir = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index_file));

    Router::new()
        .nest("/api", api_routes.fallback(fallback))
        .fallback_service(serve_dir)
        .layer(middleware::from_fn_with_state(state.clone(), auth_layer))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for 404
pub async fn fallback() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Not Found")),
    )
}
