//! Route definitions for the Nimbus Drive HTTP API.
//!
//! All API routes are mounted under `/api`; anything else falls through to
//! the static frontend. The router receives `AppState` and passes it to
//! all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use nimbus_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(file_routes())
        .merge(upload_routes())
        .merge(folder_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);
    let frontend = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Listing, info, download, rename, delete. Entry ids are a single
/// percent-encoded path segment (encoded `/` addresses nested entries).
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/{id}/info", get(handlers::file::file_info))
        .route("/files/{id}/rename", put(handlers::file::rename_file))
        .route("/files/{id}", delete(handlers::file::delete_file))
        .route("/download/{id}", get(handlers::file::download_file))
}

/// Multipart upload. The per-stream ceiling is enforced inside the
/// ingestion pipeline, so the whole-body limit is lifted here: a batch of
/// several files may legitimately exceed any single-file ceiling.
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::upload::upload_files))
        .layer(DefaultBodyLimit::disable())
}

/// Folder creation.
fn folder_routes() -> Router<AppState> {
    Router::new().route("/folders", post(handlers::folder::create_folder))
}

/// Health check endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
