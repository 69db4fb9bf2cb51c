//! Wallet Sentry REST API Module
//! Thin axum adapter over the scan core

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use middleware::start_cleanup_task;
pub use routes::create_router;
pub use types::*;
