//! Catalog service - the read-side facade the API consumes.
//!
//! Owns the store and the taxonomy and answers every catalog question by
//! snapshotting the current product list and running the pure query layer
//! over it. Construction wires in both dependencies explicitly; there is
//! no ambient state to be "inside of".

use tracing::instrument;

use crate::models::{CategoryFilter, Product};
use crate::query;
use crate::source::ProductSource;
use crate::store::{CatalogSnapshot, CatalogStore};
use crate::taxonomy::CategoryIndex;

pub use crate::query::{DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};

/// Read-side catalog operations over the live snapshot.
pub struct CatalogService<S> {
    store: CatalogStore<S>,
    index: CategoryIndex,
}

impl<S: ProductSource> CatalogService<S> {
    /// Create a service over the given source and taxonomy.
    pub fn new(source: S, index: CategoryIndex) -> Self {
        Self {
            store: CatalogStore::new(source),
            index,
        }
    }

    /// The static taxonomy this service resolves labels against.
    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Fetch-and-replace the product snapshot. See [`CatalogStore::refetch`].
    pub async fn refresh(&self) {
        self.store.refetch().await;
    }

    /// Current products plus loading/error passthrough.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.store.snapshot().await
    }

    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category_id: &str) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        clone_all(query::by_category(&snapshot.products, category_id))
    }

    #[instrument(skip(self))]
    pub async fn products_by_filter(&self, filter: &CategoryFilter) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        clone_all(query::by_filter(&snapshot.products, filter))
    }

    #[instrument(skip(self))]
    pub async fn product(&self, id: &str) -> Option<Product> {
        let snapshot = self.store.snapshot().await;
        query::by_id(&snapshot.products, id).cloned()
    }

    #[instrument(skip(self))]
    pub async fn featured_products(&self, limit: usize) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        clone_all(query::featured(&snapshot.products, limit))
    }

    #[instrument(skip(self))]
    pub async fn related_products(&self, product_id: &str, limit: usize) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        clone_all(query::related(&snapshot.products, product_id, limit))
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, term: &str) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        clone_all(query::search(&snapshot.products, term))
    }

    /// Distinct category and sub-category ids present on the current
    /// snapshot, each sorted. Tells the shop sidebar which taxonomy
    /// entries actually have stock behind them.
    #[instrument(skip(self))]
    pub async fn ids_in_use(&self) -> (Vec<String>, Vec<String>) {
        let snapshot = self.store.snapshot().await;
        (
            query::distinct_categories(&snapshot.products),
            query::distinct_sub_categories(&snapshot.products),
        )
    }
}

fn clone_all(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdRef;
    use crate::source::StaticProductSource;
    use crate::taxonomy::CategoryIndex;

    fn product(id: &str, category: IdRef) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            brand: String::new(),
            description: String::new(),
            price: 0,
            original_price: None,
            image: String::new(),
            category,
            sub_category: None,
            in_stock: true,
            stock_count: 1,
            rating: 0.0,
            reviews: 0,
            specifications: Default::default(),
            features: Vec::new(),
            priority: None,
            videos: Vec::new(),
            featured: None,
        }
    }

    fn service() -> CatalogService<StaticProductSource> {
        let source = StaticProductSource::new(vec![
            product("a", IdRef::from("x")),
            product("b", IdRef::from(vec!["x", "y"])),
            product("c", IdRef::from("y")),
        ]);
        CatalogService::new(source, CategoryIndex::default())
    }

    #[tokio::test]
    async fn queries_run_over_the_refreshed_snapshot() {
        let service = service();
        // before the first refresh there is nothing to query
        assert!(service.products_by_category("x").await.is_empty());

        service.refresh().await;
        let in_x: Vec<String> = service
            .products_by_category("x")
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(in_x, ["a", "b"]);
        assert_eq!(service.product("c").await.unwrap().id, "c");
        assert!(service.product("d").await.is_none());
    }

    #[tokio::test]
    async fn filter_delegation_matches_the_direct_queries() {
        let service = service();
        service.refresh().await;

        let filter = CategoryFilter {
            category: "y".to_string(),
            sub_category: None,
        };
        let by_filter: Vec<String> = service
            .products_by_filter(&filter)
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(by_filter, ["b", "c"]);
    }

    #[tokio::test]
    async fn snapshot_exposes_the_passthrough_fields() {
        let service = service();
        service.refresh().await;
        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.products.len(), 3);
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
    }
}
