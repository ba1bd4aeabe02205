//! Application state management

use domain_catalog::{CatalogService, MongoProductSource};
use mongodb::{Client, Database};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    /// The catalog read side: shared so the warm-up fetch, the API, and
    /// the readiness probe all see the same snapshot.
    pub catalog: Arc<CatalogService<MongoProductSource>>,
}
