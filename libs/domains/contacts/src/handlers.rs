//! HTTP handlers for the contacts API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::ContactResult;
use crate::models::{ContactMessage, ContactStatus, SubmitContact, UpdateContactStatus};
use crate::repository::ContactRepository;
use crate::service::ContactService;

/// OpenAPI documentation for the contacts API
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact, list_contacts, get_contact, update_contact_status),
    components(
        schemas(ContactMessage, ContactStatus, SubmitContact, UpdateContactStatus),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Contacts", description = "Contact message endpoints")
    )
)]
pub struct ApiDoc;

/// Create the contacts router with all HTTP endpoints
pub fn router<R: ContactRepository + 'static>(service: ContactService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(submit_contact).get(list_contacts))
        .route("/{id}", get(get_contact))
        .route("/{id}/status", post(update_contact_status))
        .with_state(shared_service)
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "",
    tag = "Contacts",
    request_body = SubmitContact,
    responses(
        (status = 201, description = "Message stored", body = ContactMessage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_contact<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    ValidatedJson(input): ValidatedJson<SubmitContact>,
) -> ContactResult<impl IntoResponse> {
    let message = service.submit(input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Inbox query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct InboxQuery {
    /// Maximum number of messages
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of messages to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> i64 {
    50
}

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Contacts",
    params(InboxQuery),
    responses(
        (status = 200, description = "Messages, newest first", body = Vec<ContactMessage>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_contacts<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    Query(query): Query<InboxQuery>,
) -> ContactResult<Json<Vec<ContactMessage>>> {
    let messages = service.list_messages(query.limit, query.offset).await?;
    Ok(Json(messages))
}

/// Get a contact message by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Contacts",
    params(
        ("id" = Uuid, Path, description = "Message id")
    ),
    responses(
        (status = 200, description = "Message found", body = ContactMessage),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_contact<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    Path(id): Path<Uuid>,
) -> ContactResult<Json<ContactMessage>> {
    let message = service.get_message(id).await?;
    Ok(Json(message))
}

/// Move a contact message through its lifecycle
#[utoipa::path(
    post,
    path = "/{id}/status",
    tag = "Contacts",
    params(
        ("id" = Uuid, Path, description = "Message id")
    ),
    request_body = UpdateContactStatus,
    responses(
        (status = 200, description = "Status updated", body = ContactMessage),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_contact_status<R: ContactRepository>(
    State(service): State<Arc<ContactService<R>>>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateContactStatus>,
) -> ContactResult<Json<ContactMessage>> {
    let message = service.set_status(id, input.status).await?;
    Ok(Json(message))
}
