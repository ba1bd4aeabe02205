//! JSON extractor with automatic validation via the validator crate.

use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that runs the payload through its `Validate` impl.
///
/// Rejections and validation failures render the standard error envelope
/// with field-level details.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct SubmitContact {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn submit(ValidatedJson(payload): ValidatedJson<SubmitContact>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::ValidationError(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let req = json_request(r#"{"name": "abc"}"#);
        let extracted = ValidatedJson::<Payload>::from_request(req, &()).await;
        assert_eq!(extracted.unwrap().0.name, "abc");
    }

    #[tokio::test]
    async fn rejects_invalid_payload_with_400() {
        let req = json_request(r#"{"name": "ab"}"#);
        let rejection = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let req = json_request("{not json");
        let rejection = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert!(rejection.status().is_client_error());
    }
}
