//! Cart line items.

use crate::catalog::{Product, ServiceCategory};
use crate::error::CheckoutError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: u32 = 5;

/// One product entry in the cart.
///
/// Name, price, category and delivery time are captured at add-time so
/// catalog changes don't retroactively alter an active cart. A line with
/// quantity 0 does not exist; it is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub unit_price: Money,
    /// Service category at add-time.
    pub category: ServiceCategory,
    /// Delivery-time label at add-time.
    pub delivery_time: String,
    /// Quantity, always in 1..=5.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new line at quantity 1.
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            category: product.category,
            delivery_time: product.delivery_time.clone(),
            quantity: 1,
        }
    }

    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Result<Money, CheckoutError> {
        self.unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CheckoutError::Overflow)
    }

    /// Increase quantity by one, clamped at the cap.
    pub fn increment(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY_PER_LINE);
    }

    /// Check if the line is at the quantity cap.
    pub fn at_cap(&self) -> bool {
        self.quantity >= MAX_QUANTITY_PER_LINE
    }
}
