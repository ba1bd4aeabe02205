//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error codes used across the workspace.
//! Each code carries a string identifier for clients, an integer code for
//! logging and monitoring, and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// JSON extraction from the request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    // Server errors (1500s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Upstream data errors (2000-2999)
    /// Document store connection or query error
    DatabaseError,

    /// Catalog fetch from the product source failed
    FetchFailed,
}

impl ErrorCode {
    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::JsonExtraction => 1002,
            ErrorCode::NotFound => 1004,
            ErrorCode::Conflict => 1008,
            ErrorCode::UnprocessableEntity => 1022,
            ErrorCode::InternalError => 1500,
            ErrorCode::ServiceUnavailable => 1503,
            ErrorCode::DatabaseError => 2001,
            ErrorCode::FetchFailed => 2002,
        }
    }

    /// String identifier for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::FetchFailed => "FETCH_FAILED",
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Conflict => "Resource already exists",
            ErrorCode::UnprocessableEntity => "Request could not be processed",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "Document store error",
            ErrorCode::FetchFailed => "Failed to fetch products from the source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
    }

    #[test]
    fn string_identifiers_are_screaming_snake() {
        assert_eq!(ErrorCode::FetchFailed.as_str(), "FETCH_FAILED");
        assert_eq!(ErrorCode::ServiceUnavailable.as_str(), "SERVICE_UNAVAILABLE");
    }
}
