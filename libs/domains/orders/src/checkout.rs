//! Checkout handoff: render an order into the WhatsApp message the
//! retailer's sales channel expects, plus the wa.me link that opens it.

use crate::models::CheckoutRequest;

/// Format an amount in naira with thousands separators: `₦27,000,000`.
pub fn format_naira(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("₦{}{}", sign, grouped)
}

/// The rendered order message.
pub struct OrderMessage {
    text: String,
}

impl OrderMessage {
    /// Render the order text for a checkout payload.
    ///
    /// Layout matches what the sales team already parses by eye:
    /// customer block, shipping block, numbered items with per-line
    /// totals, then the summary.
    pub fn render(request: &CheckoutRequest) -> Self {
        let mut text = String::new();

        text.push_str("🛒 *New Order from Garutech*\n\n");

        text.push_str("👤 *Customer Information:*\n");
        text.push_str(&format!(
            "Name: {} {}\n",
            request.customer.first_name, request.customer.last_name
        ));
        text.push_str(&format!("Email: {}\n", request.customer.email));
        text.push_str(&format!(
            "Phone: {}\n\n",
            request.customer.phone.as_deref().unwrap_or("Not provided")
        ));

        text.push_str("📍 *Shipping Address:*\n");
        text.push_str(&format!("{}\n", request.shipping.address));
        text.push_str(&format!(
            "{}, {} {}\n\n",
            request.shipping.city, request.shipping.state, request.shipping.zip_code
        ));

        text.push_str("📦 *Order Items:*\n");
        for (index, item) in request.items.iter().enumerate() {
            let brand = if item.product.brand.is_empty() {
                "N/A"
            } else {
                item.product.brand.as_str()
            };
            text.push_str(&format!("{}. {}\n", index + 1, item.product.name));
            text.push_str(&format!("   Brand: {}\n", brand));
            text.push_str(&format!(
                "   Qty: {} × {} = {}\n\n",
                item.quantity,
                format_naira(item.product.price),
                format_naira(item.line_total())
            ));
        }

        let subtotal = request.subtotal();
        text.push_str("💰 *Order Summary:*\n");
        text.push_str(&format!(
            "Subtotal ({} items): {}\n",
            request.item_count(),
            format_naira(subtotal)
        ));
        text.push_str(&format!("*Total: {}*\n\n", format_naira(subtotal)));
        text.push_str("Please confirm this order and provide payment instructions. Thank you! 🙏");

        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Build the `https://wa.me/<number>?text=...` link for a message.
pub fn wa_me_link(phone_number: &str, message: &OrderMessage) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone_number,
        urlencoding::encode(message.text())
    )
}
