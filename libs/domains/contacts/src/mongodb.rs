//! MongoDB implementation of ContactRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ContactError, ContactResult};
use crate::models::{ContactMessage, ContactStatus, SubmitContact};
use crate::repository::ContactRepository;

/// MongoDB implementation of the ContactRepository
pub struct MongoContactRepository {
    collection: Collection<ContactMessage>,
}

impl MongoContactRepository {
    /// Create a new MongoContactRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<ContactMessage>("contacts");
        Self { collection }
    }

    /// Initialize indexes for the inbox listing
    pub async fn init_indexes(&self) -> ContactResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "status": 1, "created_at": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_status_created".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Contact indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    #[instrument(skip(self, input), fields(subject = %input.subject))]
    async fn create(&self, input: SubmitContact) -> ContactResult<ContactMessage> {
        let message = ContactMessage::new(input);

        self.collection.insert_one(&message).await?;

        tracing::info!(message_id = %message.id, "Contact message stored");
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<ContactMessage>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let message = self.collection.find_one(filter).await?;
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: u64) -> ContactResult<Vec<ContactMessage>> {
        let options = FindOptions::builder()
            .limit(limit)
            .skip(offset)
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let messages: Vec<ContactMessage> = cursor.try_collect().await?;

        Ok(messages)
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: ContactStatus) -> ContactResult<ContactMessage> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let update = doc! { "$set": { "status": status.to_string() } };
        self.collection.update_one(filter.clone(), update).await?;

        let message = self
            .collection
            .find_one(filter)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        tracing::info!(message_id = %id, status = %status, "Contact status updated");
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ContactResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}
