//! Contacts Domain
//!
//! Contact-form messages from the storefront: submission with
//! validation, an inbox listing for the admin surface, and a
//! new/read/replied status lifecycle. Same layering as the catalog
//! domain: handlers → service → repository (trait + MongoDB) → models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ContactError, ContactResult};
pub use handlers::ApiDoc;
pub use models::{ContactMessage, ContactStatus, SubmitContact, UpdateContactStatus};
pub use mongodb::MongoContactRepository;
pub use repository::ContactRepository;
pub use service::ContactService;
