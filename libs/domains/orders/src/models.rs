use domain_catalog::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product plus the quantity the buyer wants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity, in whole currency units.
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

/// An in-memory cart.
///
/// Adding an already-present product bumps its quantity; setting a
/// quantity to zero removes the line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// Who is ordering.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

/// Where the order ships.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub zip_code: String,
}

/// The checkout payload: customer, shipping, and the cart lines.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[validate(nested)]
    pub customer: CustomerDetails,
    #[validate(nested)]
    pub shipping: ShippingAddress,
    #[validate(length(min = 1, message = "cart is empty"))]
    pub items: Vec<CartItem>,
}

impl CheckoutRequest {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
