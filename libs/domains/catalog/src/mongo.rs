//! MongoDB implementation of [`ProductSource`].

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::source::ProductSource;

/// Product source backed by a MongoDB collection.
///
/// Pulls the whole display-ready catalog in one query: soft-deleted
/// records (`isActive: false`) are excluded, newest records come first.
/// Records missing `isActive` are treated as active, matching how the
/// legacy data was written before soft-deletion existed.
pub struct MongoProductSource {
    collection: Collection<Product>,
}

impl MongoProductSource {
    /// Create a source over the default `products` collection.
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a source over a custom collection name.
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for the fetch query and the admin tooling.
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            // The fetch query: active records, newest first
            IndexModel::builder()
                .keys(doc! { "isActive": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_active_created".to_string())
                        .build(),
                )
                .build(),
            // Category browsing (multikey over scalar or list values)
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "subCategory": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_sub_category".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// The underlying collection, for admin tooling.
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }
}

#[async_trait]
impl ProductSource for MongoProductSource {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        let filter = doc! { "isActive": { "$ne": false } };

        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Fetched product catalog");
        Ok(products)
    }
}
