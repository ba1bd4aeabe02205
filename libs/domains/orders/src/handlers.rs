//! HTTP handlers for the checkout API

use axum::{routing::post, Extension, Json, Router};
use axum_helpers::{
    errors::responses::BadRequestValidationResponse,
    ValidatedJson,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::checkout::{wa_me_link, OrderMessage};
use crate::models::{CartItem, CheckoutRequest, CustomerDetails, ShippingAddress};

/// OpenAPI documentation for the checkout API
#[derive(OpenApi)]
#[openapi(
    paths(checkout_quote),
    components(
        schemas(
            CheckoutRequest,
            CartItem,
            CustomerDetails,
            ShippingAddress,
            CheckoutQuote,
            domain_catalog::Product,
            domain_catalog::IdRef
        ),
        responses(BadRequestValidationResponse)
    ),
    tags(
        (name = "Checkout", description = "Checkout handoff endpoints")
    )
)]
pub struct ApiDoc;

/// Checkout configuration: where the handoff lands.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// WhatsApp number in international format without '+', e.g. 2348012345678
    pub whatsapp_number: String,
}

/// Create the checkout router
pub fn router(config: CheckoutConfig) -> Router {
    Router::new()
        .route("/quote", post(checkout_quote))
        .layer(Extension(config))
}

/// The rendered handoff for an order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    /// The order message, ready to paste or send
    pub message: String,
    /// wa.me deep link that opens the chat with the message pre-filled
    pub whatsapp_link: String,
    /// Order total in whole currency units
    pub total: i64,
    /// Total units across all lines
    pub item_count: u32,
}

/// Render an order into its WhatsApp handoff
#[utoipa::path(
    post,
    path = "/quote",
    tag = "Checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Rendered order handoff", body = CheckoutQuote),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn checkout_quote(
    Extension(config): Extension<CheckoutConfig>,
    ValidatedJson(request): ValidatedJson<CheckoutRequest>,
) -> Json<CheckoutQuote> {
    let message = OrderMessage::render(&request);
    let link = wa_me_link(&config.whatsapp_number, &message);

    tracing::info!(
        items = request.items.len(),
        total = request.subtotal(),
        "Checkout handoff rendered"
    );

    Json(CheckoutQuote {
        message: message.text().to_string(),
        whatsapp_link: link,
        total: request.subtotal(),
        item_count: request.item_count(),
    })
}
