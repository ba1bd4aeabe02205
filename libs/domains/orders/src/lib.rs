//! Orders Domain
//!
//! The cart and the checkout handoff. There is no payment processing:
//! checkout renders the order into the retailer's WhatsApp channel as a
//! pre-filled message link, and the conversation takes it from there.

pub mod checkout;
pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use checkout::{format_naira, wa_me_link, OrderMessage};
pub use handlers::{ApiDoc, CheckoutConfig};
pub use models::{Cart, CartItem, CheckoutRequest, CustomerDetails, ShippingAddress};
