use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// The seam between the catalog store and whatever holds the product
/// records.
///
/// The store only ever asks for the full list; any backend returning the
/// same shape is substitutable. Fetch failures surface as errors here and
/// become the store's `error` field, never a crash.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the complete, display-ready product list.
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>>;
}

/// A fixed in-memory product list.
///
/// Backs the seeded demo catalog and the handler tests; returns a clone
/// of the same list on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

impl StaticProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}
