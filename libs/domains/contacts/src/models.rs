use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Contact message lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContactStatus {
    /// Just submitted, nobody has looked at it
    #[default]
    New,
    /// Seen by staff
    Read,
    /// Answered
    Replied,
}

/// Contact message entity - stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Message subject line
    pub subject: String,
    /// Message body
    pub message: String,
    /// Lifecycle status
    pub status: ContactStatus,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for submitting a contact message
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitContact {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// DTO for moving a message through its lifecycle
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateContactStatus {
    pub status: ContactStatus,
}

impl ContactMessage {
    /// Create a new message from the submit DTO
    pub fn new(input: SubmitContact) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            subject: input.subject,
            message: input.message,
            status: ContactStatus::New,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit() -> SubmitContact {
        SubmitContact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            subject: "Spray booth quote".to_string(),
            message: "Please send pricing for the 7.5kw model.".to_string(),
        }
    }

    #[test]
    fn new_messages_start_in_new_status() {
        let message = ContactMessage::new(submit());
        assert_eq!(message.status, ContactStatus::New);
        assert_eq!(message.email, "ada@example.com");
    }

    #[test]
    fn submit_validation_rejects_bad_email() {
        let mut input = submit();
        input.email = "not-an-email".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn submit_validation_rejects_empty_subject() {
        let mut input = submit();
        input.subject = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(ContactStatus::Replied.to_string(), "replied");
        assert_eq!("read".parse::<ContactStatus>().unwrap(), ContactStatus::Read);
    }
}
