//! HTTP-level middleware: CORS and security headers.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a CORS layer for the given comma-separated origin list.
///
/// The storefront frontend is a browser client on a different origin, so
/// every API deployment must name its allowed origins explicitly.
pub fn create_cors_layer(origins: &str) -> Result<CorsLayer, String> {
    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| format!("invalid origin '{}': {}", s, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if allowed.is_empty() {
        return Err("origin list is empty".to_string());
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Middleware that adds security headers to all responses.
///
/// - X-Content-Type-Options: nosniff
/// - X-Frame-Options: DENY
/// - Referrer-Policy: strict-origin-when-cross-origin
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_comma_separated_origins() {
        let layer = create_cors_layer("http://localhost:3000, https://shop.example.com");
        assert!(layer.is_ok());
    }

    #[test]
    fn cors_rejects_empty_list() {
        assert!(create_cors_layer("  ,  ").is_err());
    }

    #[test]
    fn cors_rejects_unparseable_origin() {
        assert!(create_cors_layer("http://ok.example\nbad").is_err());
    }
}
