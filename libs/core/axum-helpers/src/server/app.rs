use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Start the Axum server with graceful shutdown.
///
/// # Errors
/// Fails if the TCP listener cannot bind or the server errors while
/// running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Assemble the application router with the cross-cutting layers.
///
/// Sets up:
/// - Swagger UI at `/swagger-ui` backed by `T`'s OpenAPI document
/// - API routes nested under `/api` (state already applied per domain)
/// - request tracing, security headers, CORS, response compression
/// - the 404 fallback
///
/// # CORS (required)
///
/// `CORS_ALLOWED_ORIGIN` must be set with comma-separated allowed
/// origins, e.g. `CORS_ALLOWED_ORIGIN=http://localhost:5173`; startup
/// fails otherwise.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let origins = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. \
             Example: CORS_ALLOWED_ORIGIN=http://localhost:5173,https://shop.example.com",
        )
    })?;

    let cors_layer = create_cors_layer(&origins)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!("CORS configured with allowed origins: {}", origins);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Production entry point: serve with graceful shutdown, then run the
/// cleanup future (bounded by `shutdown_timeout`) before returning.
///
/// # Example
/// ```ignore
/// create_production_app(app, &config.server, Duration::from_secs(30), async move {
///     drop(mongo_client);
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let serve_result = create_app(router, server_config).await;

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
