use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ContactResult;
use crate::models::{ContactMessage, ContactStatus, SubmitContact};

/// Repository trait for contact message persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new message
    async fn create(&self, input: SubmitContact) -> ContactResult<ContactMessage>;

    /// Get a message by id
    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<ContactMessage>>;

    /// List messages, newest first
    async fn list(&self, limit: i64, offset: u64) -> ContactResult<Vec<ContactMessage>>;

    /// Move a message to a new lifecycle status
    async fn set_status(&self, id: Uuid, status: ContactStatus) -> ContactResult<ContactMessage>;

    /// Count all messages
    async fn count(&self) -> ContactResult<u64>;
}
