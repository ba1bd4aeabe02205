//! Catalog Domain
//!
//! The product catalog for the storefront: a static category taxonomy, an
//! in-memory snapshot of the product list, and a pure query layer over
//! both.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← snapshot + taxonomy wiring
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │    Store    │ ──▶ │    Query    │  ← pure derivations over a snapshot
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Source    │  ← data access (trait + MongoDB implementation)
//! └─────────────┘
//! ```
//!
//! The store is the only writer: a refetch replaces the whole product
//! list on success and leaves it untouched on failure. Every query is a
//! read-only derivation over the snapshot it is handed, so readers never
//! contend with each other.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     mongo::MongoProductSource,
//!     service::CatalogService,
//!     taxonomy::CategoryIndex,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! let source = MongoProductSource::new(&db);
//! let service = std::sync::Arc::new(CatalogService::new(source, CategoryIndex::default()));
//! service.refresh().await;
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod query;
pub mod service;
pub mod source;
pub mod store;
pub mod taxonomy;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{CategoryFilter, IdRef, Product};
pub use mongo::MongoProductSource;
pub use service::CatalogService;
pub use source::{ProductSource, StaticProductSource};
pub use store::{CatalogSnapshot, CatalogStore};
pub use taxonomy::{Category, CategoryIndex, SubCategory};
