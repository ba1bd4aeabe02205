//! Contact service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ContactError, ContactResult};
use crate::models::{ContactMessage, ContactStatus, SubmitContact};
use crate::repository::ContactRepository;

/// Contact message operations: validated submission and the inbox.
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Submit a contact message
    #[instrument(skip(self, input), fields(subject = %input.subject))]
    pub async fn submit(&self, input: SubmitContact) -> ContactResult<ContactMessage> {
        input
            .validate()
            .map_err(|e| ContactError::Validation(e.to_string()))?;

        let message = self.repository.create(input).await?;

        // Notification hook: the retailer reads these from the admin
        // surface; the event below is what ops alerting keys on.
        tracing::info!(
            message_id = %message.id,
            from = %message.email,
            "New contact message received"
        );

        Ok(message)
    }

    /// Get a message by id
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: Uuid) -> ContactResult<ContactMessage> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))
    }

    /// List messages, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(&self, limit: i64, offset: u64) -> ContactResult<Vec<ContactMessage>> {
        self.repository.list(limit, offset).await
    }

    /// Move a message through its lifecycle
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> ContactResult<ContactMessage> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ContactError::NotFound(id));
        }

        self.repository.set_status(id, status).await
    }

    /// Count all messages
    #[instrument(skip(self))]
    pub async fn count(&self) -> ContactResult<u64> {
        self.repository.count().await
    }
}

impl<R: ContactRepository> Clone for ContactService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
