//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::{logging_middleware, rate_limit_middleware};

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS wide-open for dashboard frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health & Stats
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        // Wallet scanning
        .route("/scan", post(handlers::start_scan))
        .route("/status/:address", get(handlers::get_status))
        .route("/validate-address", post(handlers::validate_address))
        .route("/dashboard/:address", get(handlers::get_dashboard));

    Router::new()
        .nest("/v1", api_v1)
        // Also expose health at root for load balancers
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(rate_limit_middleware))
}
