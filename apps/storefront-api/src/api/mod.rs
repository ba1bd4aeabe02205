//! API routes module

pub mod health;

use axum::Router;
use domain_contacts::{ContactService, MongoContactRepository};
use domain_orders::handlers::CheckoutConfig;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let contacts = ContactService::new(MongoContactRepository::new(&state.db));
    let checkout = CheckoutConfig {
        whatsapp_number: state.config.whatsapp_number.clone(),
    };

    Router::new()
        .nest(
            "/products",
            domain_catalog::handlers::router(state.catalog.clone()),
        )
        .nest(
            "/categories",
            domain_catalog::handlers::taxonomy_router(state.catalog.index().clone()),
        )
        .nest("/contacts", domain_contacts::handlers::router(contacts))
        .nest("/checkout", domain_orders::handlers::router(checkout))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    domain_catalog::MongoProductSource::new(&state.db)
        .init_indexes()
        .await?;
    MongoContactRepository::new(&state.db).init_indexes().await?;
    Ok(())
}
