use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Strangler facade: the flag set decides which implementation serves
        .route("/api/products", get(handlers::strangler::list))
        .route("/api/products", post(handlers::strangler::create))
        .route("/api/products/{id}", get(handlers::strangler::get))
        .route("/api/products/{id}", put(handlers::strangler::update))
        .route("/api/products/{id}", delete(handlers::strangler::delete))
        // Version-pinned routes bypass the flags, for side-by-side comparison
        .route("/api/v1/products", get(handlers::v1::list))
        .route("/api/v1/products", post(handlers::v1::create))
        .route("/api/v1/products/{id}", get(handlers::v1::get))
        .route("/api/v1/products/{id}", put(handlers::v1::update))
        .route("/api/v1/products/{id}", delete(handlers::v1::delete))
        .route("/api/v2/products", get(handlers::v2::list))
        .route("/api/v2/products", post(handlers::v2::create))
        .route("/api/v2/products/{id}", get(handlers::v2::get))
        .route("/api/v2/products/{id}", put(handlers::v2::update))
        .route("/api/v2/products/{id}", delete(handlers::v2::delete))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
