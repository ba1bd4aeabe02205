//! # Axum Helpers
//!
//! Shared plumbing for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: custom extractors (validated JSON)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: router assembly, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::ValidatedJson;
pub use http::{create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
