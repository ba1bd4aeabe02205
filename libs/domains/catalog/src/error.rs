use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures on the catalog's data path.
///
/// Query operations never produce these: "not found" is absence. The
/// error surface is the product source and the document store behind it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product fetch failed: {0}")]
    Fetch(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Fetch(msg) => {
                AppError::ServiceUnavailable(format!("Product source unavailable: {}", msg))
            }
            CatalogError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}
