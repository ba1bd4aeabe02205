//! Server infrastructure: router assembly with OpenAPI docs, health and
//! readiness endpoints, graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
