//! The live product snapshot.
//!
//! One fetch cycle = one snapshot: a refetch replaces the whole list on
//! success and keeps the previous list on failure. The store is the only
//! writer; readers take cheap `Arc` clones of the current state and the
//! query layer derives everything else from those.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::models::Product;
use crate::source::ProductSource;

/// What a reader sees: the product list plus the fetch status fields.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Arc<Vec<Product>>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
struct StoreState {
    products: Arc<Vec<Product>>,
    loading: bool,
    error: Option<String>,
}

/// Replaceable cache of the last successful fetch.
pub struct CatalogStore<S> {
    source: S,
    state: RwLock<StoreState>,
}

impl<S: ProductSource> CatalogStore<S> {
    /// Create an empty store. Nothing is fetched until [`refetch`] runs.
    ///
    /// [`refetch`]: CatalogStore::refetch
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState {
                products: Arc::new(Vec::new()),
                loading: false,
                error: None,
            }),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            products: Arc::clone(&state.products),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Fetch the product list from the source and replace the snapshot.
    ///
    /// On failure the previous list is retained and the error message is
    /// exposed on the snapshot; `loading` is set for the duration of the
    /// fetch either way.
    #[instrument(skip(self))]
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        let outcome = self.source.fetch_all().await;

        let mut state = self.state.write().await;
        state.loading = false;
        match outcome {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog snapshot replaced");
                state.products = Arc::new(products);
                state.error = None;
            }
            Err(e) => {
                tracing::warn!("Catalog refetch failed, keeping previous snapshot: {}", e);
                state.error = Some(e.to_string());
            }
        }
    }
}
